use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Coarse severity tier attached to every advisor profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Green,
    Yellow,
    Red,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 3] = [HealthStatus::Green, HealthStatus::Yellow, HealthStatus::Red];

    /// Maps a roll in `[0, 100)` onto a tier: 60% green, 20% yellow, 20% red.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=59 => HealthStatus::Green,
            60..=79 => HealthStatus::Yellow,
            _ => HealthStatus::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Green => "Green",
            HealthStatus::Yellow => "Yellow",
            HealthStatus::Red => "Red",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Green" => Ok(HealthStatus::Green),
            "Yellow" => Ok(HealthStatus::Yellow),
            "Red" => Ok(HealthStatus::Red),
            other => Err(Error::Unexpected(format!(
                "Unknown health status '{}'",
                other
            ))),
        }
    }
}
