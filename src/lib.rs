//! pendusim - Frame-driven damped pendulum simulation
//!
//! Numerically integrates a damped simple pendulum one host frame at a time,
//! derives its energy, and keeps a bounded history of measurements for
//! charting and for the experiment record produced when a run completes.
//!
//! # Architecture
//!
//! - [`Pendulum`] owns the state and the run lifecycle; there is no global state
//! - [`solvers::SemiImplicitEuler`] advances `[angle, angular_velocity]`
//! - [`MeasurementBuffer`] keeps a sliding window of samples
//! - [`SimulationController`] applies UI commands from other threads through a channel
//!
//! The host owns the clock tick: it calls [`Pendulum::step_frame`] (or
//! [`Pendulum::step`] with a measured `dt`) once per rendered frame while the
//! pendulum is running.
//!
//! # Example
//!
//! ```rust,ignore
//! use pendusim::prelude::*;
//!
//! let mut pendulum = Pendulum::new(SimulationSettings::default())?;
//! pendulum.set_length(0.8)?;
//! pendulum.set_angle(Degrees(30.0))?;
//! pendulum.start();
//!
//! for _ in 0..600 {
//!     pendulum.step_frame();
//! }
//!
//! pendulum.pause();
//! let record = pendulum.finalize()?;
//! ```

pub mod clock;
pub mod controller;
pub mod energy;
pub mod error;
pub mod frame;
pub mod params;
pub mod pendulum;
pub mod recorder;
pub mod solvers;
pub mod units;
pub mod utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{Command, ControlHandle, SimulationController, TickReport};
pub use energy::{DerivedQuantities, EnergyBreakdown};
pub use error::PendulumError;
pub use frame::FrameSnapshot;
pub use params::{Length, Mass};
pub use pendulum::{Pendulum, PendulumParameters};
pub use recorder::MeasurementBuffer;
pub use units::{Degrees, Radians};

pub use pendusim_types::{
    DampingPolicy, ExperimentRecord, ExperimentStats, Measurement, PendulumPreferences,
    SettingsError, SimulationSettings,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::controller::{Command, ControlHandle, SimulationController, TickReport};
    pub use crate::energy::{DerivedQuantities, EnergyBreakdown};
    pub use crate::error::PendulumError;
    pub use crate::pendulum::{Pendulum, PendulumParameters};
    pub use crate::recorder::MeasurementBuffer;
    pub use crate::units::{Degrees, Radians};
    pub use pendusim_types::{
        DampingPolicy, ExperimentRecord, ExperimentStats, Measurement, PendulumPreferences,
        SimulationSettings,
    };
}
