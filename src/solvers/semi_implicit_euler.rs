//! Semi-implicit Euler method for the damped simple pendulum

use nalgebra::Vector2;
use pendusim_types::{DampingPolicy, SimulationSettings};

use crate::params::Length;

/// Semi-implicit (symplectic) Euler integrator for θ'' = -(g/L)·sin θ
///
/// The state vector is `[angle, angular_velocity]`.
///
/// # Mathematical Form
/// ```text
/// α_n     = -(g / L) * sin(θ_n)
/// ω_{n+1} = (ω_n + h * α_n) * d
/// θ_{n+1} = θ_n + h * ω_{n+1}
/// ```
///
/// where `d` is the damping factor for the step: the constant `damping` under
/// [`DampingPolicy::PerStep`], or `damping^(h / h_ref)` under
/// [`DampingPolicy::TimeNormalized`].
///
/// # Characteristics
/// - Order: 1
/// - Stages: 1
/// - Explicit, fixed timestep
/// - Symplectic when `d = 1`: energy oscillates around the true value instead of drifting
///
/// The full nonlinear `sin θ` term is kept; there is no small-angle approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemiImplicitEuler {
    gravity: f64,
    damping: f64,
    policy: DampingPolicy,
    reference_dt: f64,
}

impl SemiImplicitEuler {
    /// Create an integrator. `reference_dt` is only used by the time-normalized policy.
    pub fn new(gravity: f64, damping: f64, policy: DampingPolicy, reference_dt: f64) -> Self {
        Self {
            gravity,
            damping,
            policy,
            reference_dt,
        }
    }

    /// Create an integrator from validated settings
    pub fn from_settings(settings: &SimulationSettings) -> Self {
        Self::new(
            settings.gravity,
            settings.damping,
            settings.damping_policy,
            settings.time_step,
        )
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Restoring angular acceleration at `angle`
    #[inline]
    pub fn angular_acceleration(&self, length: Length, angle: f64) -> f64 {
        -(self.gravity / length.get()) * angle.sin()
    }

    /// Velocity decay applied for a step of size `dt`
    #[inline]
    pub fn damping_factor(&self, dt: f64) -> f64 {
        match self.policy {
            DampingPolicy::PerStep => self.damping,
            DampingPolicy::TimeNormalized => self.damping.powf(dt / self.reference_dt),
        }
    }

    /// Advance `[angle, angular_velocity]` by `dt`
    pub fn step(&self, state: &Vector2<f64>, length: Length, dt: f64) -> Vector2<f64> {
        let (angle, velocity) = (state[0], state[1]);

        let acceleration = self.angular_acceleration(length, angle);
        let velocity = (velocity + acceleration * dt) * self.damping_factor(dt);
        let angle = angle + velocity * dt;

        Vector2::new(angle, velocity)
    }
}
