use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Urine specific gravity as offered by the intake form's selector.
///
/// Only the five dipstick graduations are representable. On the wire the
/// value is a plain JSON number (`1.015`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum SpecificGravity {
    #[default]
    Sg1005,
    Sg1010,
    Sg1015,
    Sg1020,
    Sg1025,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("specific gravity {0} is not one of 1.005, 1.010, 1.015, 1.020, 1.025")]
pub struct InvalidSpecificGravity(pub f64);

impl SpecificGravity {
    pub const ALL: [SpecificGravity; 5] = [
        SpecificGravity::Sg1005,
        SpecificGravity::Sg1010,
        SpecificGravity::Sg1015,
        SpecificGravity::Sg1020,
        SpecificGravity::Sg1025,
    ];

    pub fn value(self) -> f64 {
        match self {
            SpecificGravity::Sg1005 => 1.005,
            SpecificGravity::Sg1010 => 1.010,
            SpecificGravity::Sg1015 => 1.015,
            SpecificGravity::Sg1020 => 1.020,
            SpecificGravity::Sg1025 => 1.025,
        }
    }
}

impl TryFrom<f64> for SpecificGravity {
    type Error = InvalidSpecificGravity;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // Allow floating point tolerance
        Self::ALL
            .into_iter()
            .find(|sg| (sg.value() - value).abs() < 1e-9)
            .ok_or(InvalidSpecificGravity(value))
    }
}

impl From<SpecificGravity> for f64 {
    fn from(sg: SpecificGravity) -> Self {
        sg.value()
    }
}

impl fmt::Display for SpecificGravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.value())
    }
}
