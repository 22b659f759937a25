//! Validated physical parameters
//!
//! `Length` and `Mass` can only hold finite, strictly positive values, so the
//! integrator never divides by zero or propagates NaN from its parameters.

use crate::error::PendulumError;
use crate::utils::constants::{DEFAULT_LENGTH, DEFAULT_MASS};

/// Check that `value` is finite and strictly positive
fn positive_finite(parameter: &'static str, value: f64) -> Result<f64, PendulumError> {
    if !value.is_finite() {
        return Err(PendulumError::NonFinite { parameter, value });
    }
    if value <= 0.0 {
        return Err(PendulumError::NotPositive { parameter, value });
    }
    Ok(value)
}

/// Check that `value` is finite
pub(crate) fn finite(parameter: &'static str, value: f64) -> Result<f64, PendulumError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PendulumError::NonFinite { parameter, value })
    }
}

/// String length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Length(f64);

impl Length {
    pub fn new(meters: f64) -> Result<Self, PendulumError> {
        positive_finite("length", meters).map(Self)
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Length {
    fn default() -> Self {
        Self(DEFAULT_LENGTH)
    }
}

impl TryFrom<f64> for Length {
    type Error = PendulumError;

    fn try_from(meters: f64) -> Result<Self, Self::Error> {
        Self::new(meters)
    }
}

/// Bob mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Mass(f64);

impl Mass {
    pub fn new(kilograms: f64) -> Result<Self, PendulumError> {
        positive_finite("mass", kilograms).map(Self)
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Mass {
    fn default() -> Self {
        Self(DEFAULT_MASS)
    }
}

impl TryFrom<f64> for Mass {
    type Error = PendulumError;

    fn try_from(kilograms: f64) -> Result<Self, Self::Error> {
        Self::new(kilograms)
    }
}
