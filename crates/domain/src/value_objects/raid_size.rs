//! Raid capacity value object

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of slots in one party. Raids are displayed as parties of this size.
pub const PARTY_SIZE: usize = 4;

/// A raid's slot capacity. Only 4, 8 and 16 player raids exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RaidSize {
    #[default]
    Four,
    Eight,
    Sixteen,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unsupported raid size: {0} (expected 4, 8 or 16)")]
pub struct RaidSizeError(pub u64);

impl RaidSize {
    pub const ALL: [RaidSize; 3] = [RaidSize::Four, RaidSize::Eight, RaidSize::Sixteen];

    pub fn get(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    pub fn slots(self) -> usize {
        usize::from(self.get())
    }

    /// Number of parties the raid is split into for display.
    pub fn party_count(self) -> usize {
        self.slots().div_ceil(PARTY_SIZE)
    }
}

impl TryFrom<u64> for RaidSize {
    type Error = RaidSizeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            other => Err(RaidSizeError(other)),
        }
    }
}

impl TryFrom<u8> for RaidSize {
    type Error = RaidSizeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(u64::from(value))
    }
}

impl From<RaidSize> for u8 {
    fn from(size: RaidSize) -> u8 {
        size.get()
    }
}

impl fmt::Display for RaidSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Players", self.get())
    }
}
