//! Native host driver built on tokio
//!
//! [`AutoScrollDriver::run`] owns the controller and the surface inside one
//! task. Timers are tokio interval tasks that send their [`TimerId`] back over a
//! channel; UI commands arrive through an [`AutoScrollHandle`]. When every
//! handle is dropped the loop ends, the controller is dropped and every timer
//! task is aborted.

use crate::config::AutoScrollConfig;
use crate::controller::AutoScrollController;
use crate::error::Result;
use crate::events::{AutoScrollEvent, Interaction};
use crate::scheduler::{TickScheduler, TimerId};
use crate::surface::ScrollSurface;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Receiving end of a driver's notifications
pub type EventReceiver = mpsc::UnboundedReceiver<AutoScrollEvent>;

/// Scheduler backed by tokio interval tasks
///
/// Must be used from inside a tokio runtime.
pub struct TokioScheduler {
    ticks: mpsc::UnboundedSender<TimerId>,
    timers: HashMap<TimerId, JoinHandle<()>>,
    next_id: u64,
}

impl TokioScheduler {
    /// Create a scheduler that reports firings on `ticks`
    pub fn new(ticks: mpsc::UnboundedSender<TimerId>) -> Self {
        Self {
            ticks,
            timers: HashMap::new(),
            next_id: 0,
        }
    }

    /// Timers currently running
    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }
}

impl TickScheduler for TokioScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        let id = TimerId::new(self.next_id);
        self.next_id += 1;

        let ticks = self.ticks.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if ticks.send(id).is_err() {
                    break;
                }
            }
        });

        self.timers.insert(id, handle);
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(handle) = self.timers.remove(&timer) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}

/// Command sent from the UI to a running driver
#[derive(Debug, Clone, PartialEq)]
pub enum AutoScrollCommand {
    /// Start scrolling
    Start,
    /// Stop scrolling
    Stop,
    /// Start or stop
    Toggle,
    /// Set the speed multiplier (clamped)
    ChangeSpeed(f64),
    /// One step faster
    SpeedUp,
    /// One step slower
    SpeedDown,
    /// The user touched the view
    Interaction(Interaction),
    /// The view reported its scroll offset
    PositionChanged(f64),
}

/// Cloneable sender side of a driver
///
/// Methods return `false` once the driver has finished.
#[derive(Debug, Clone)]
pub struct AutoScrollHandle {
    commands: mpsc::UnboundedSender<AutoScrollCommand>,
}

impl AutoScrollHandle {
    /// Send a raw command
    pub fn send(&self, command: AutoScrollCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    /// Start scrolling
    pub fn start(&self) -> bool {
        self.send(AutoScrollCommand::Start)
    }

    /// Stop scrolling
    pub fn stop(&self) -> bool {
        self.send(AutoScrollCommand::Stop)
    }

    /// Start or stop
    pub fn toggle(&self) -> bool {
        self.send(AutoScrollCommand::Toggle)
    }

    /// Set the speed multiplier
    pub fn change_speed(&self, speed: f64) -> bool {
        self.send(AutoScrollCommand::ChangeSpeed(speed))
    }

    /// Report a user interaction
    pub fn interaction(&self, interaction: Interaction) -> bool {
        self.send(AutoScrollCommand::Interaction(interaction))
    }

    /// Report the view's scroll offset
    pub fn position_changed(&self, position: f64) -> bool {
        self.send(AutoScrollCommand::PositionChanged(position))
    }
}

/// Single-task owner of a controller and its surface
pub struct AutoScrollDriver<S: ScrollSurface> {
    controller: AutoScrollController<TokioScheduler>,
    surface: S,
    ticks: mpsc::UnboundedReceiver<TimerId>,
    commands: mpsc::UnboundedReceiver<AutoScrollCommand>,
    events: mpsc::UnboundedSender<AutoScrollEvent>,
}

impl<S: ScrollSurface> AutoScrollDriver<S> {
    /// Build a driver for `surface` starting at `speed`
    ///
    /// Returns the driver, the handle for UI commands and the event stream.
    pub fn new(
        config: AutoScrollConfig,
        surface: S,
        speed: f64,
    ) -> Result<(Self, AutoScrollHandle, EventReceiver)> {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let controller = AutoScrollController::with_speed(config, TokioScheduler::new(tick_tx), speed)?;

        let driver = Self {
            controller,
            surface,
            ticks: tick_rx,
            commands: command_rx,
            events: event_tx,
        };

        Ok((
            driver,
            AutoScrollHandle {
                commands: command_tx,
            },
            event_rx,
        ))
    }

    /// Process commands and ticks until every handle is dropped
    ///
    /// Gives the surface back once the controller and its timers are gone.
    pub async fn run(mut self) -> S {
        info!(speed = self.controller.speed(), "Auto-scroll driver running");

        loop {
            tokio::select! {
                biased;

                command = self.commands.recv() => match command {
                    Some(command) => self.apply(command),
                    None => break,
                },

                Some(timer) = self.ticks.recv() => {
                    self.controller.on_tick(timer, &mut self.surface);
                }
            }

            self.forward_events();
        }

        debug!("Auto-scroll driver shutting down");
        let Self {
            controller, surface, ..
        } = self;
        drop(controller);
        surface
    }

    fn apply(&mut self, command: AutoScrollCommand) {
        match command {
            AutoScrollCommand::Start => self.controller.start(),
            AutoScrollCommand::Stop => self.controller.stop(),
            AutoScrollCommand::Toggle => self.controller.toggle(),
            AutoScrollCommand::ChangeSpeed(speed) => {
                self.controller.change_speed(speed);
            }
            AutoScrollCommand::SpeedUp => {
                self.controller.speed_up();
            }
            AutoScrollCommand::SpeedDown => {
                self.controller.speed_down();
            }
            AutoScrollCommand::Interaction(interaction) => {
                self.controller.on_user_interaction(interaction);
            }
            AutoScrollCommand::PositionChanged(position) => {
                self.controller.on_position_changed(position);
            }
        }
    }

    fn forward_events(&mut self) {
        for event in self.controller.drain_events() {
            // Nobody listening is fine
            let _ = self.events.send(event);
        }
    }
}
