//! Measurements and finalized experiment records.
//!
//! `ExperimentRecord` is the value handed to the persistence layer when a run is
//! completed. Its field names and units are part of that contract: angle in
//! degrees, duration in seconds, measurement angles in radians.

use serde::{Deserialize, Serialize};

/// One recorded sample of a run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    /// Seconds since the run started
    pub time: f64,
    /// Angle in radians
    pub angle: f64,
    /// Total mechanical energy in joules
    pub energy: f64,
}

/// Snapshot of a completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// String length in meters
    pub length: f64,
    /// Bob mass in kilograms
    pub mass: f64,
    /// Release angle in degrees
    pub angle: f64,
    /// Run duration in seconds
    pub duration: f64,
    /// Samples in chronological order
    pub measurements: Vec<Measurement>,
}

/// Aggregate statistics over a set of experiments
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentStats {
    pub total_experiments: usize,
    pub avg_duration: f64,
    pub avg_angle: f64,
    pub total_time: f64,
}

impl ExperimentStats {
    /// Aggregate a set of records. An empty set yields all zeros.
    pub fn from_records(records: &[ExperimentRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let count = records.len() as f64;
        let total_time: f64 = records.iter().map(|r| r.duration).sum();
        let angle_sum: f64 = records.iter().map(|r| r.angle).sum();

        Self {
            total_experiments: records.len(),
            avg_duration: total_time / count,
            avg_angle: angle_sum / count,
            total_time,
        }
    }
}
