//! Pendulum simulation core
//!
//! Owns the physical state of one pendulum, advances it once per host frame,
//! records a bounded history of measurements, and produces the experiment
//! record handed to persistence when a run is completed.
//!
//! # Lifecycle
//!
//! ```text
//!            start()                 pause()
//!   Idle ─────────────► Running ◄──────────────► Paused
//!    ▲                     │        start()         │
//!    │   reset() / finalize()                       │
//!    └─────────────────────┴────────────────────────┘
//! ```
//!
//! A new run (buffer cleared, time origin set) begins only when starting from
//! `Idle`. Resuming from `Paused` keeps the buffer and the time origin.

use std::num::NonZeroUsize;
use std::time::Duration;

use log::{debug, trace, warn};
use nalgebra::Vector2;
use pendusim_types::{
    ExperimentRecord, Measurement, PendulumPreferences, SettingsError, SimulationSettings,
};

use crate::clock::{Clock, SystemClock};
use crate::energy::{DerivedQuantities, EnergyBreakdown};
use crate::error::PendulumError;
use crate::frame::{bob_position, FrameSnapshot};
use crate::params::{finite, Length, Mass};
use crate::recorder::MeasurementBuffer;
use crate::solvers::SemiImplicitEuler;
use crate::units::{Degrees, Radians};
use crate::utils::constants::DEFAULT_ANGLE;

/// A validated set of pendulum parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParameters {
    pub length: Length,
    pub mass: Mass,
    pub angle: Radians,
}

impl PendulumParameters {
    /// Factory defaults: 1 m, 1 kg, 45°
    pub fn factory() -> Self {
        Self {
            length: Length::default(),
            mass: Mass::default(),
            angle: Radians(DEFAULT_ANGLE),
        }
    }

    /// Validate stored preferences
    pub fn from_preferences(prefs: &PendulumPreferences) -> Result<Self, PendulumError> {
        let angle = finite("angle", prefs.default_angle)?;
        Ok(Self {
            length: Length::new(prefs.default_length)?,
            mass: Mass::new(prefs.default_mass)?,
            angle: Degrees(angle).into(),
        })
    }

    /// Export as preferences, angle in degrees
    pub fn to_preferences(&self) -> PendulumPreferences {
        PendulumPreferences {
            default_length: self.length.get(),
            default_mass: self.mass.get(),
            default_angle: self.angle.to_degrees().value(),
        }
    }
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self::factory()
    }
}

/// Damped simple pendulum driven by a host frame loop
///
/// # Example
///
/// ```ignore
/// let mut pendulum = Pendulum::new(SimulationSettings::default())?;
/// pendulum.set_angle(Degrees(30.0))?;
/// pendulum.start();
///
/// // host render loop
/// while pendulum.is_running() {
///     pendulum.step_frame();
///     draw(pendulum.frame());
/// }
///
/// let record = pendulum.finalize()?;
/// ```
#[derive(Debug)]
pub struct Pendulum<C: Clock = SystemClock> {
    settings: SimulationSettings,
    solver: SemiImplicitEuler,
    /// Values restored by `reset()`
    defaults: PendulumParameters,

    length: Length,
    mass: Mass,
    /// `[angle, angular_velocity]`
    state: Vector2<f64>,
    initial_angle: f64,

    running: bool,
    run_start: Option<Duration>,
    paused_at: Option<Duration>,
    measurements: MeasurementBuffer,

    clock: C,
}

impl Pendulum<SystemClock> {
    /// Create a pendulum with factory defaults on the system clock
    pub fn new(settings: SimulationSettings) -> Result<Self, PendulumError> {
        Self::with_clock(settings, SystemClock::new())
    }
}

impl<C: Clock> Pendulum<C> {
    /// Create a pendulum with factory defaults
    pub fn with_clock(settings: SimulationSettings, clock: C) -> Result<Self, PendulumError> {
        Self::with_parameters(settings, PendulumParameters::factory(), clock)
    }

    /// Create a pendulum seeded from stored preferences
    ///
    /// The preferences become the session defaults that `reset()` restores.
    pub fn with_preferences(
        settings: SimulationSettings,
        prefs: &PendulumPreferences,
        clock: C,
    ) -> Result<Self, PendulumError> {
        let params = PendulumParameters::from_preferences(prefs)?;
        Self::with_parameters(settings, params, clock)
    }

    /// Create a pendulum with explicit session defaults
    pub fn with_parameters(
        settings: SimulationSettings,
        defaults: PendulumParameters,
        clock: C,
    ) -> Result<Self, PendulumError> {
        settings.validate()?;
        let capacity =
            NonZeroUsize::new(settings.buffer_capacity).ok_or(SettingsError::ZeroCapacity)?;

        Ok(Self {
            solver: SemiImplicitEuler::from_settings(&settings),
            settings,
            defaults,
            length: defaults.length,
            mass: defaults.mass,
            state: Vector2::new(defaults.angle.value(), 0.0),
            initial_angle: defaults.angle.value(),
            running: false,
            run_start: None,
            paused_at: None,
            measurements: MeasurementBuffer::new(capacity),
            clock,
        })
    }

    // ---- parameters ----

    /// Set the string length. Rejected during a run (running or paused) or when not
    /// finite and positive.
    pub fn set_length(&mut self, meters: f64) -> Result<(), PendulumError> {
        let length = Length::new(meters)?;
        self.ensure_no_run("length")?;
        self.length = length;
        debug!("length set to {} m", meters);
        Ok(())
    }

    /// Set the bob mass. Rejected during a run (running or paused) or when not finite
    /// and positive.
    pub fn set_mass(&mut self, kilograms: f64) -> Result<(), PendulumError> {
        let mass = Mass::new(kilograms)?;
        self.ensure_no_run("mass")?;
        self.mass = mass;
        debug!("mass set to {} kg", kilograms);
        Ok(())
    }

    /// Set the release angle; same as [`Pendulum::restart_from_angle`]
    pub fn set_angle(&mut self, angle: impl Into<Radians>) -> Result<(), PendulumError> {
        self.restart_from_angle(angle)
    }

    /// Re-cock the pendulum: hold it at rest at `angle`
    ///
    /// Sets the live and initial angle and zeroes the angular velocity. Allowed
    /// mid-run. The measurement buffer is left alone.
    pub fn restart_from_angle(&mut self, angle: impl Into<Radians>) -> Result<(), PendulumError> {
        let angle = finite("angle", angle.into().value())?;
        self.state = Vector2::new(angle, 0.0);
        self.initial_angle = angle;
        debug!("restarted from rest at {}", Radians(angle).to_degrees());
        Ok(())
    }

    /// Apply stored preferences as the new parameters and session defaults
    ///
    /// All three values are validated before anything changes.
    pub fn apply_preferences(&mut self, prefs: &PendulumPreferences) -> Result<(), PendulumError> {
        let params = PendulumParameters::from_preferences(prefs)?;
        self.ensure_no_run("preferences")?;

        self.length = params.length;
        self.mass = params.mass;
        self.restart_from_angle(params.angle)?;
        self.defaults = params;
        Ok(())
    }

    /// Current parameters in preference-store form
    pub fn preferences(&self) -> PendulumPreferences {
        self.parameters().to_preferences()
    }

    /// Current length, mass and initial angle
    pub fn parameters(&self) -> PendulumParameters {
        PendulumParameters {
            length: self.length,
            mass: self.mass,
            angle: Radians(self.initial_angle),
        }
    }

    fn ensure_no_run(&self, parameter: &'static str) -> Result<(), PendulumError> {
        if self.run_start.is_some() {
            warn!("rejected change of {} during a run", parameter);
            return Err(PendulumError::Running { parameter });
        }
        Ok(())
    }

    // ---- lifecycle ----

    /// Begin or resume stepping. No-op when already running.
    ///
    /// A new run releases the bob from rest at the initial angle, so a run
    /// started after `finalize()` does not inherit the previous swing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }

        if self.run_start.is_none() {
            self.state = Vector2::new(self.initial_angle, 0.0);
            self.run_start = Some(self.clock.now());
            self.measurements.clear();
            debug!(
                "new run started at {}",
                Radians(self.initial_angle).to_degrees()
            );
        } else {
            debug!("run resumed");
        }
        self.paused_at = None;
        self.running = true;
    }

    /// Stop stepping and return the elapsed run time. `None` when not running.
    pub fn pause(&mut self) -> Option<Duration> {
        if !self.running {
            return None;
        }

        let now = self.clock.now();
        self.running = false;
        self.paused_at = Some(now);

        let elapsed = self.run_start.map(|start| now.saturating_sub(start));
        debug!("run paused after {:?}", elapsed);
        elapsed
    }

    /// Start when stopped, pause when running
    ///
    /// Returns the elapsed run time when this call paused the run.
    pub fn toggle(&mut self) -> Option<Duration> {
        if self.running {
            self.pause()
        } else {
            self.start();
            None
        }
    }

    /// Restore the session defaults and discard the current run
    pub fn reset(&mut self) {
        self.length = self.defaults.length;
        self.mass = self.defaults.mass;
        self.state = Vector2::new(self.defaults.angle.value(), 0.0);
        self.initial_angle = self.defaults.angle.value();

        self.running = false;
        self.run_start = None;
        self.paused_at = None;
        self.measurements.clear();
        debug!("pendulum reset");
    }

    /// Complete the current run and return its record
    ///
    /// The record owns a copy of the measurements. The next `start()` begins a
    /// new run.
    pub fn finalize(&mut self) -> Result<ExperimentRecord, PendulumError> {
        let start = self.run_start.ok_or(PendulumError::NoActiveRun)?;
        let end = self.end_of_run();
        let duration = end.saturating_sub(start).as_secs_f64();

        let record = ExperimentRecord {
            length: self.length.get(),
            mass: self.mass.get(),
            angle: Radians(self.initial_angle).to_degrees().value(),
            duration,
            measurements: self.measurements.data(),
        };

        self.running = false;
        self.run_start = None;
        self.paused_at = None;
        debug!(
            "run completed: {:.3} s, {} measurements",
            duration,
            record.measurements.len()
        );
        Ok(record)
    }

    /// Elapsed time of the current run, frozen while paused
    pub fn elapsed(&self) -> Option<Duration> {
        self.run_start
            .map(|start| self.end_of_run().saturating_sub(start))
    }

    fn end_of_run(&self) -> Duration {
        match self.paused_at {
            Some(at) if !self.running => at,
            _ => self.clock.now(),
        }
    }

    // ---- stepping ----

    /// Advance one nominal frame
    pub fn step_frame(&mut self) -> Option<Measurement> {
        self.step(self.settings.time_step)
    }

    /// Advance the state by `dt` seconds and record a measurement
    ///
    /// Does nothing while not running. A non-finite or non-positive `dt` is
    /// skipped, and one above `max_time_step` is clamped to it.
    pub fn step(&mut self, dt: f64) -> Option<Measurement> {
        if !self.running {
            return None;
        }
        if !dt.is_finite() || dt <= 0.0 {
            warn!("skipping step with invalid dt {}", dt);
            return None;
        }
        let dt = if dt > self.settings.max_time_step {
            trace!("clamping dt {} to {}", dt, self.settings.max_time_step);
            self.settings.max_time_step
        } else {
            dt
        };

        self.state = self.solver.step(&self.state, self.length, dt);
        debug_assert!(
            self.state.iter().all(|v| v.is_finite()),
            "pendulum state became non-finite: {:?}",
            self.state
        );

        let measurement = Measurement {
            time: self.run_time(),
            angle: self.state[0],
            energy: self.energy().total,
        };
        self.measurements.record(measurement);
        trace!(
            "t={:.3} θ={:.5} ω={:.5} E={:.5}",
            measurement.time,
            measurement.angle,
            self.state[1],
            measurement.energy
        );
        Some(measurement)
    }

    fn run_time(&self) -> f64 {
        self.run_start
            .map(|start| self.clock.now().saturating_sub(start))
            .unwrap_or_default()
            .as_secs_f64()
    }

    // ---- derived values ----

    /// Energy of the live state
    pub fn energy(&self) -> EnergyBreakdown {
        EnergyBreakdown::new(
            self.length,
            self.mass,
            self.solver.gravity(),
            self.state[0],
            self.state[1],
        )
    }

    /// Ideal small-angle period and frequency for the current length
    pub fn derived_quantities(&self) -> DerivedQuantities {
        DerivedQuantities::new(self.length, self.solver.gravity())
    }

    /// Owned view for a renderer
    pub fn frame(&self) -> FrameSnapshot {
        FrameSnapshot {
            angle: self.state[0],
            angular_velocity: self.state[1],
            length: self.length.get(),
            mass: self.mass.get(),
            is_running: self.running,
            bob: bob_position(self.length.get(), self.state[0]),
        }
    }

    // ---- accessors ----

    pub fn angle(&self) -> f64 {
        self.state[0]
    }

    pub fn angular_velocity(&self) -> f64 {
        self.state[1]
    }

    pub fn length(&self) -> f64 {
        self.length.get()
    }

    pub fn mass(&self) -> f64 {
        self.mass.get()
    }

    /// Angle at the last parameter change or reset
    pub fn initial_angle(&self) -> f64 {
        self.initial_angle
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Measurements of the current (or last completed) run
    pub fn measurements(&self) -> &MeasurementBuffer {
        &self.measurements
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Session defaults restored by `reset()`
    pub fn defaults(&self) -> PendulumParameters {
        self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    fn pendulum() -> (Pendulum<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let pendulum = Pendulum::with_clock(SimulationSettings::default(), clock.clone()).unwrap();
        (pendulum, clock)
    }

    fn run_frames(pendulum: &mut Pendulum<ManualClock>, clock: &ManualClock, frames: usize) {
        for _ in 0..frames {
            clock.advance_secs(pendulum.settings().time_step);
            pendulum.step_frame();
        }
    }

    #[test]
    fn test_factory_defaults() {
        let (p, _) = pendulum();
        assert_eq!(p.length(), 1.0);
        assert_eq!(p.mass(), 1.0);
        assert_eq!(p.angle(), FRAC_PI_4);
        assert_eq!(p.initial_angle(), FRAC_PI_4);
        assert_eq!(p.angular_velocity(), 0.0);
        assert!(!p.is_running());
        assert!(p.measurements().is_empty());
        assert!(p.elapsed().is_none());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = SimulationSettings::default();
        settings.buffer_capacity = 0;
        let result = Pendulum::with_clock(settings, ManualClock::new());
        assert!(matches!(result, Err(PendulumError::Settings(_))));
    }

    #[test]
    fn test_step_while_stopped_is_noop() {
        let (mut p, _) = pendulum();
        assert!(p.step_frame().is_none());
        assert_eq!(p.angle(), FRAC_PI_4);
        assert!(p.measurements().is_empty());
    }

    #[test]
    fn test_step_records_time_since_start() {
        let (mut p, clock) = pendulum();
        clock.advance_secs(10.0);
        p.start();
        run_frames(&mut p, &clock, 3);

        let data = p.measurements().data();
        assert_eq!(data.len(), 3);
        assert_relative_eq!(data[0].time, 0.016, epsilon = 1e-9);
        assert_relative_eq!(data[2].time, 0.048, epsilon = 1e-9);
        assert_eq!(data[2].angle, p.angle());
        assert_relative_eq!(data[2].energy, p.energy().total);
    }

    #[test]
    fn test_invalid_dt_skipped() {
        let (mut p, _) = pendulum();
        p.start();
        assert!(p.step(0.0).is_none());
        assert!(p.step(-0.016).is_none());
        assert!(p.step(f64::NAN).is_none());
        assert_eq!(p.angle(), FRAC_PI_4);
        assert!(p.measurements().is_empty());
    }

    #[test]
    fn test_large_dt_clamped() {
        let (mut clamped, _) = pendulum();
        let (mut reference, _) = pendulum();
        clamped.start();
        reference.start();

        clamped.step(1.0);
        reference.step(reference.settings().max_time_step);

        assert_eq!(clamped.angle(), reference.angle());
        assert_eq!(clamped.angular_velocity(), reference.angular_velocity());
    }

    #[test]
    fn test_pause_keeps_run() {
        let (mut p, clock) = pendulum();
        p.start();
        run_frames(&mut p, &clock, 10);

        let elapsed = p.pause().unwrap();
        assert_relative_eq!(elapsed.as_secs_f64(), 0.16, epsilon = 1e-9);
        assert!(!p.is_running());
        assert!(p.pause().is_none());

        // Elapsed is frozen while paused
        clock.advance_secs(5.0);
        assert_eq!(p.elapsed(), Some(elapsed));

        p.start();
        run_frames(&mut p, &clock, 1);
        assert_eq!(p.measurements().len(), 11);
        // Timeline includes the paused gap
        assert_relative_eq!(
            p.measurements().last().unwrap().time,
            5.176,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_start_is_idempotent() {
        let (mut p, clock) = pendulum();
        p.start();
        run_frames(&mut p, &clock, 5);
        p.start();
        assert_eq!(p.measurements().len(), 5);
        assert!(p.is_running());
    }

    #[test]
    fn test_toggle() {
        let (mut p, clock) = pendulum();
        assert!(p.toggle().is_none());
        assert!(p.is_running());
        run_frames(&mut p, &clock, 5);
        let paused = p.toggle().unwrap();
        assert_relative_eq!(paused.as_secs_f64(), 0.08, epsilon = 1e-9);
        assert!(!p.is_running());
    }

    #[test]
    fn test_length_and_mass_locked_while_running() {
        let (mut p, _) = pendulum();
        p.start();
        assert!(matches!(
            p.set_length(1.5),
            Err(PendulumError::Running { parameter: "length" })
        ));
        assert!(matches!(
            p.set_mass(0.5),
            Err(PendulumError::Running { parameter: "mass" })
        ));
        assert_eq!(p.length(), 1.0);
        assert_eq!(p.mass(), 1.0);

        p.finalize().unwrap();
        p.set_length(1.5).unwrap();
        p.set_mass(0.5).unwrap();
        assert_eq!(p.length(), 1.5);
        assert_eq!(p.mass(), 0.5);
    }

    #[test]
    fn test_length_and_mass_locked_while_paused() {
        let (mut p, clock) = pendulum();
        p.start();
        run_frames(&mut p, &clock, 50);
        p.pause();

        assert!(matches!(
            p.set_length(2.0),
            Err(PendulumError::Running { parameter: "length" })
        ));
        assert!(matches!(
            p.set_mass(3.0),
            Err(PendulumError::Running { parameter: "mass" })
        ));
        let prefs = PendulumPreferences {
            default_length: 2.0,
            ..PendulumPreferences::default()
        };
        assert!(p.apply_preferences(&prefs).is_err());

        let record = p.finalize().unwrap();
        assert_eq!(record.length, 1.0);
        assert_eq!(record.mass, 1.0);
    }

    #[test]
    fn test_new_run_starts_from_rest() {
        let (mut p, clock) = pendulum();
        p.start();
        run_frames(&mut p, &clock, 40);
        p.finalize().unwrap();
        assert_ne!(p.angular_velocity(), 0.0);

        p.start();
        assert_eq!(p.angle(), FRAC_PI_4);
        assert_eq!(p.angular_velocity(), 0.0);
        assert_eq!(p.initial_angle(), FRAC_PI_4);
    }

    #[test]
    fn test_set_angle_in_degrees() {
        let (mut p, _) = pendulum();
        p.set_angle(Degrees(-30.0)).unwrap();
        assert_relative_eq!(p.angle(), -30f64.to_radians());
        assert_eq!(p.initial_angle(), p.angle());
    }

    #[test]
    fn test_set_angle_does_not_touch_buffer() {
        let (mut p, clock) = pendulum();
        p.start();
        run_frames(&mut p, &clock, 4);
        p.restart_from_angle(Radians(0.1)).unwrap();
        assert_eq!(p.measurements().len(), 4);
        assert!(p.is_running());
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        let (mut p, _) = pendulum();
        assert!(p.set_angle(Radians(f64::NAN)).is_err());
        assert_eq!(p.angle(), FRAC_PI_4);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (mut p, clock) = pendulum();
        p.set_length(0.3).unwrap();
        p.set_mass(2.0).unwrap();
        p.set_angle(Radians(0.2)).unwrap();
        p.start();
        run_frames(&mut p, &clock, 20);

        p.reset();

        assert_eq!(p.length(), 1.0);
        assert_eq!(p.mass(), 1.0);
        assert_eq!(p.angle(), FRAC_PI_4);
        assert_eq!(p.initial_angle(), FRAC_PI_4);
        assert_eq!(p.angular_velocity(), 0.0);
        assert!(!p.is_running());
        assert!(p.measurements().is_empty());
        assert!(p.elapsed().is_none());
    }

    #[test]
    fn test_finalize_without_run() {
        let (mut p, _) = pendulum();
        assert!(matches!(p.finalize(), Err(PendulumError::NoActiveRun)));
    }

    #[test]
    fn test_finalize_record() {
        let (mut p, clock) = pendulum();
        p.set_mass(0.5).unwrap();
        p.set_angle(Degrees(30.0)).unwrap();
        p.start();
        run_frames(&mut p, &clock, 50);
        p.pause();
        clock.advance_secs(3.0);

        let record = p.finalize().unwrap();
        assert_eq!(record.length, 1.0);
        assert_eq!(record.mass, 0.5);
        assert_relative_eq!(record.angle, 30.0, epsilon = 1e-9);
        // Duration stops at the pause
        assert_relative_eq!(record.duration, 0.8, epsilon = 1e-9);
        assert_eq!(record.measurements.len(), 50);
        assert!(!p.is_running());

        // Next start is a fresh run
        p.start();
        assert!(p.measurements().is_empty());
    }

    #[test]
    fn test_finalize_while_running() {
        let (mut p, clock) = pendulum();
        p.start();
        run_frames(&mut p, &clock, 5);
        clock.advance_secs(0.02);

        let record = p.finalize().unwrap();
        assert_relative_eq!(record.duration, 0.1, epsilon = 1e-9);
        assert!(!p.is_running());
        assert!(matches!(p.finalize(), Err(PendulumError::NoActiveRun)));
    }

    #[test]
    fn test_preferences_seed_session() {
        let prefs = PendulumPreferences {
            default_length: 1.2,
            default_mass: 0.5,
            default_angle: 45.0,
        };
        let mut p =
            Pendulum::with_preferences(SimulationSettings::default(), &prefs, ManualClock::new())
                .unwrap();
        assert_eq!(p.length(), 1.2);
        assert_eq!(p.mass(), 0.5);
        assert_relative_eq!(p.angle(), FRAC_PI_4, epsilon = 1e-12);

        p.set_length(0.4).unwrap();
        p.reset();
        assert_eq!(p.length(), 1.2);
    }

    #[test]
    fn test_apply_preferences_all_or_nothing() {
        let (mut p, _) = pendulum();
        let bad = PendulumPreferences {
            default_length: 0.5,
            default_mass: -1.0,
            default_angle: 10.0,
        };
        assert!(p.apply_preferences(&bad).is_err());
        assert_eq!(p.length(), 1.0);
        assert_eq!(p.angle(), FRAC_PI_4);

        let good = PendulumPreferences {
            default_length: 0.5,
            default_mass: 2.0,
            default_angle: 10.0,
        };
        p.apply_preferences(&good).unwrap();
        assert_eq!(p.length(), 0.5);
        assert_eq!(p.mass(), 2.0);
        assert_relative_eq!(p.preferences().default_angle, 10.0, epsilon = 1e-9);
        assert_eq!(p.defaults().length.get(), 0.5);
    }

    #[test]
    fn test_frame_snapshot() {
        let (mut p, _) = pendulum();
        p.set_angle(Radians(0.0)).unwrap();
        let frame = p.frame();
        assert_eq!(frame.angle, 0.0);
        assert_eq!(frame.length, 1.0);
        assert!(!frame.is_running);
        assert_relative_eq!(frame.bob.y, 1.0);
    }

    #[test]
    fn test_energy_decreases_under_damping() {
        let (mut p, clock) = pendulum();
        let e0 = p.energy().total;
        p.start();
        run_frames(&mut p, &clock, 600);
        assert!(p.energy().total < e0);
    }
}
