//! Application layer - roster use cases built on the outbound ports

pub mod services;
