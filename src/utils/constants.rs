//! Factory defaults for a new session
//!
//! Simulation constants (gravity, damping, timesteps, buffer size) live with
//! `SimulationSettings` in `pendusim-types`.

use std::f64::consts::FRAC_PI_4;

/// Factory default string length (m)
pub const DEFAULT_LENGTH: f64 = 1.0;

/// Factory default bob mass (kg)
pub const DEFAULT_MASS: f64 = 1.0;

/// Factory default release angle (rad)
pub const DEFAULT_ANGLE: f64 = FRAC_PI_4;
