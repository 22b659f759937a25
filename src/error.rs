//! Error types for the simulation core

use pendusim_types::SettingsError;
use thiserror::Error;

/// Pendulum-related errors
#[derive(Error, Debug)]
pub enum PendulumError {
    #[error("Parameter `{parameter}` must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("Parameter `{parameter}` must be positive, got {value}")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error("Cannot change `{parameter}` while a run is in progress")]
    Running { parameter: &'static str },

    #[error("No run has been started")]
    NoActiveRun,

    #[error("Simulation controller is no longer running")]
    ControllerClosed,

    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
}
