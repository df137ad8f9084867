//! Tracing subscriber setup for the host process

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "raidmint_player=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a subscriber was already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(default_filter: &str) -> bool {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Route tracing events and panics to the browser console.
///
/// There is no environment in the browser, so the filter argument is unused.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(_default_filter: &str) -> bool {
    console_error_panic_hook::set_once();
    tracing_wasm::try_set_as_global_default().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init_logging(DEFAULT_LOG_FILTER);
        assert!(!init_logging(DEFAULT_LOG_FILTER));
    }
}
