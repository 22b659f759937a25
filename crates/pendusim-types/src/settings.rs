//! Simulation settings types.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Velocity decay factor applied per step
pub const DAMPING: f64 = 0.999;

/// Nominal frame timestep (~60 fps)
pub const SIM_TIMESTEP: f64 = 0.016;

/// Largest host-supplied timestep before clamping
pub const SIM_TIMESTEP_MAX: f64 = 0.05;

/// Default measurement window size
pub const BUFFER_CAPACITY: usize = 1000;

/// Settings-related errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Setting `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Setting `{name}` out of range: {value} (expected {expected})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Buffer capacity must be at least 1")]
    ZeroCapacity,

    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the per-step damping factor reacts to the step size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DampingPolicy {
    /// Multiply by `damping` on every step, whatever `dt` is
    PerStep,
    /// Multiply by `damping^(dt / time_step)`, so decay per second is frame-rate independent
    TimeNormalized,
}

impl Default for DampingPolicy {
    fn default() -> Self {
        DampingPolicy::PerStep
    }
}

impl DampingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DampingPolicy::PerStep => "per_step",
            DampingPolicy::TimeNormalized => "time_normalized",
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,

    /// Velocity decay factor applied per step
    pub damping: f64,

    /// Nominal frame timestep (s)
    pub time_step: f64,

    /// Largest host-supplied timestep accepted before clamping (s)
    pub max_time_step: f64,

    /// Number of measurements kept in the sliding window
    pub buffer_capacity: usize,

    /// Damping behaviour under variable timesteps
    pub damping_policy: DampingPolicy,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            damping: DAMPING,
            time_step: SIM_TIMESTEP,
            max_time_step: SIM_TIMESTEP_MAX,
            buffer_capacity: BUFFER_CAPACITY,
            damping_policy: DampingPolicy::PerStep,
        }
    }
}

impl SimulationSettings {
    /// Parse settings from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize settings to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every field is usable by the integrator
    pub fn validate(&self) -> Result<(), SettingsError> {
        finite("gravity", self.gravity)?;
        finite("damping", self.damping)?;
        finite("time_step", self.time_step)?;
        finite("max_time_step", self.max_time_step)?;

        if self.gravity <= 0.0 {
            return Err(SettingsError::OutOfRange {
                name: "gravity",
                value: self.gravity,
                expected: "> 0",
            });
        }
        if self.damping <= 0.0 || self.damping > 1.0 {
            return Err(SettingsError::OutOfRange {
                name: "damping",
                value: self.damping,
                expected: "in (0, 1]",
            });
        }
        if self.time_step <= 0.0 {
            return Err(SettingsError::OutOfRange {
                name: "time_step",
                value: self.time_step,
                expected: "> 0",
            });
        }
        if self.max_time_step < self.time_step {
            return Err(SettingsError::OutOfRange {
                name: "max_time_step",
                value: self.max_time_step,
                expected: ">= time_step",
            });
        }
        if self.buffer_capacity == 0 {
            return Err(SettingsError::ZeroCapacity);
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NonFinite { name, value })
    }
}
