//! Energy and reference quantities of a pendulum state

use std::f64::consts::TAU;

use serde::Serialize;

use crate::params::{Length, Mass};

/// Mechanical energy split for one state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EnergyBreakdown {
    /// Bob height above the lowest point (m)
    pub height: f64,
    /// m·g·h (J)
    pub potential: f64,
    /// ½·m·(ω·L)² (J)
    pub kinetic: f64,
    /// potential + kinetic (J)
    pub total: f64,
}

impl EnergyBreakdown {
    pub fn new(
        length: Length,
        mass: Mass,
        gravity: f64,
        angle: f64,
        angular_velocity: f64,
    ) -> Self {
        let (length, mass) = (length.get(), mass.get());

        let height = length * (1.0 - angle.cos());
        let potential = mass * gravity * height;
        let speed = angular_velocity * length;
        let kinetic = 0.5 * mass * speed * speed;

        Self {
            height,
            potential,
            kinetic,
            total: potential + kinetic,
        }
    }
}

/// Ideal small-angle period and frequency
///
/// These are reference values for display; they do not follow the damped,
/// nonlinear motion the integrator produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedQuantities {
    /// 2π·√(L/g) (s)
    pub period: f64,
    /// 1 / period (Hz)
    pub frequency: f64,
}

impl DerivedQuantities {
    pub fn new(length: Length, gravity: f64) -> Self {
        let period = TAU * (length.get() / gravity).sqrt();
        Self {
            period,
            frequency: 1.0 / period,
        }
    }
}
