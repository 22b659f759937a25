//! Single-writer control of a pendulum from other threads
//!
//! UI events are sent as [`Command`]s through a [`ControlHandle`]. The
//! [`SimulationController`] owns the pendulum, drains pending commands at the
//! start of each frame in the order they were sent, then steps once.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use log::{debug, warn};
use pendusim_types::{ExperimentRecord, Measurement, PendulumPreferences};

use crate::clock::{Clock, SystemClock};
use crate::error::PendulumError;
use crate::frame::FrameSnapshot;
use crate::pendulum::Pendulum;
use crate::units::Radians;

/// Control-surface event
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetLength(f64),
    SetMass(f64),
    SetAngle(Radians),
    Start,
    Pause,
    Toggle,
    Reset,
    /// Finalize the current run for persistence
    Complete,
    ApplyPreferences(PendulumPreferences),
}

/// Cloneable sender side of a controller
#[derive(Debug, Clone)]
pub struct ControlHandle {
    sender: Sender<Command>,
}

impl ControlHandle {
    pub fn send(&self, command: Command) -> Result<(), PendulumError> {
        self.sender
            .send(command)
            .map_err(|_| PendulumError::ControllerClosed)
    }

    pub fn set_length(&self, meters: f64) -> Result<(), PendulumError> {
        self.send(Command::SetLength(meters))
    }

    pub fn set_mass(&self, kilograms: f64) -> Result<(), PendulumError> {
        self.send(Command::SetMass(kilograms))
    }

    pub fn set_angle(&self, angle: impl Into<Radians>) -> Result<(), PendulumError> {
        self.send(Command::SetAngle(angle.into()))
    }

    pub fn start(&self) -> Result<(), PendulumError> {
        self.send(Command::Start)
    }

    pub fn pause(&self) -> Result<(), PendulumError> {
        self.send(Command::Pause)
    }

    pub fn toggle(&self) -> Result<(), PendulumError> {
        self.send(Command::Toggle)
    }

    pub fn reset(&self) -> Result<(), PendulumError> {
        self.send(Command::Reset)
    }

    pub fn complete(&self) -> Result<(), PendulumError> {
        self.send(Command::Complete)
    }
}

/// Everything that happened during one frame
#[derive(Debug)]
pub struct TickReport {
    /// State after the frame
    pub frame: FrameSnapshot,
    /// Sample recorded this frame, if the pendulum stepped
    pub measurement: Option<Measurement>,
    /// Commands that were rejected, with the reason
    pub rejected: Vec<(Command, PendulumError)>,
    /// Runs completed this frame, for the persistence layer
    pub completed: Vec<ExperimentRecord>,
    /// New defaults for the preference store after a parameter change
    pub preferences: Option<PendulumPreferences>,
    /// Elapsed run time reported by a pause this frame
    pub paused_after: Option<Duration>,
}

/// What the commands drained in one tick produced
#[derive(Default)]
struct CommandEffects {
    rejected: Vec<(Command, PendulumError)>,
    completed: Vec<ExperimentRecord>,
    preferences: Option<PendulumPreferences>,
    paused_after: Option<Duration>,
}

/// Owns a pendulum and applies queued commands before each step
#[derive(Debug)]
pub struct SimulationController<C: Clock = SystemClock> {
    pendulum: Pendulum<C>,
    receiver: Receiver<Command>,
    sender: Sender<Command>,
}

impl<C: Clock> SimulationController<C> {
    /// Wrap a pendulum; returns the controller and a first handle
    pub fn new(pendulum: Pendulum<C>) -> (Self, ControlHandle) {
        let (sender, receiver) = mpsc::channel();
        let handle = ControlHandle {
            sender: sender.clone(),
        };
        (
            Self {
                pendulum,
                receiver,
                sender,
            },
            handle,
        )
    }

    /// Another handle to the same command queue
    pub fn handle(&self) -> ControlHandle {
        ControlHandle {
            sender: self.sender.clone(),
        }
    }

    pub fn pendulum(&self) -> &Pendulum<C> {
        &self.pendulum
    }

    /// Give the pendulum back, dropping any unprocessed commands
    pub fn into_pendulum(self) -> Pendulum<C> {
        self.pendulum
    }

    /// Apply pending commands and advance one nominal frame
    pub fn tick(&mut self) -> TickReport {
        let dt = self.pendulum.settings().time_step;
        self.tick_with(dt)
    }

    /// Apply pending commands and advance by a host-measured `dt`
    pub fn tick_with(&mut self, dt: f64) -> TickReport {
        let mut effects = CommandEffects::default();
        while let Ok(command) = self.receiver.try_recv() {
            self.apply(command, &mut effects);
        }

        let measurement = self.pendulum.step(dt);
        TickReport {
            frame: self.pendulum.frame(),
            measurement,
            rejected: effects.rejected,
            completed: effects.completed,
            preferences: effects.preferences,
            paused_after: effects.paused_after,
        }
    }

    fn apply(&mut self, command: Command, effects: &mut CommandEffects) {
        debug!("applying {:?}", command);

        let result = match &command {
            Command::SetLength(meters) => self.pendulum.set_length(*meters).map(|_| true),
            Command::SetMass(kilograms) => self.pendulum.set_mass(*kilograms).map(|_| true),
            Command::SetAngle(angle) => self.pendulum.set_angle(*angle).map(|_| true),
            Command::ApplyPreferences(prefs) => {
                self.pendulum.apply_preferences(prefs).map(|_| true)
            }
            Command::Start => {
                self.pendulum.start();
                Ok(false)
            }
            Command::Pause => {
                effects.paused_after = self.pendulum.pause().or(effects.paused_after);
                Ok(false)
            }
            Command::Toggle => {
                effects.paused_after = self.pendulum.toggle().or(effects.paused_after);
                Ok(false)
            }
            Command::Reset => {
                self.pendulum.reset();
                Ok(false)
            }
            Command::Complete => self.pendulum.finalize().map(|record| {
                effects.completed.push(record);
                false
            }),
        };

        match result {
            Ok(true) => effects.preferences = Some(self.pendulum.preferences()),
            Ok(false) => {}
            Err(err) => {
                warn!("rejected {:?}: {}", command, err);
                effects.rejected.push((command, err));
            }
        }
    }
}
