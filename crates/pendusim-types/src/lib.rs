//! Shared types for pendusim.
//!
//! This crate defines the data exchanged between the simulation core and its
//! collaborators:
//! - Simulation settings and configuration
//! - Pendulum preferences (session defaults)
//! - Measurements, finalized experiment records and their statistics

mod experiment;
mod preferences;
mod settings;

pub use experiment::*;
pub use preferences::*;
pub use settings::*;
