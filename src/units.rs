//! Angle units
//!
//! The core works in radians. Degrees only appear at the control surface and
//! in persisted records, and every conversion goes through these types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Radians {
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }
}

impl Degrees {
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl From<Degrees> for Radians {
    fn from(angle: Degrees) -> Self {
        angle.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(angle: Radians) -> Self {
        angle.to_degrees()
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
