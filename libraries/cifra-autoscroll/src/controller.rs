//! Auto-scroll state machine
//!
//! The controller is sans-IO: it never sleeps or reads a clock. A
//! [`TickScheduler`] delivers timer ids, the host forwards them to
//! [`AutoScrollController::on_tick`] together with the surface to move, and
//! notifications pile up until [`AutoScrollController::drain_events`].
//!
//! At most one timer is alive at any time. Every transition that replaces or
//! releases the timer cancels the old one before doing anything else, and ticks
//! from any id other than the live one are dropped.

use crate::config::AutoScrollConfig;
use crate::error::Result;
use crate::events::{AutoScrollEvent, Interaction};
use crate::scheduler::{TickScheduler, TimerId};
use crate::surface::ScrollSurface;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

/// Whether ticks are being scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollState {
    /// No timer, surface untouched
    Idle,
    /// A repeating timer advances the surface
    Running,
}

/// Speed multiplier kept inside the configured bounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ScrollSpeed(f64);

impl ScrollSpeed {
    /// Clamp `value` into the range allowed by `config`
    pub fn clamped(value: f64, config: &AutoScrollConfig) -> Self {
        Self(config.clamp_speed(value))
    }

    /// Raw multiplier
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Live state of one auto-scroll run
///
/// `is_playing` is derived from the timer handle, so the two can never
/// disagree.
#[derive(Debug)]
pub struct AutoScrollSession {
    speed: ScrollSpeed,
    timer: Option<TimerId>,
    position: f64,
}

impl AutoScrollSession {
    fn new(speed: ScrollSpeed) -> Self {
        Self {
            speed,
            timer: None,
            position: 0.0,
        }
    }

    /// Whether a timer is currently live
    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Current speed multiplier
    pub fn speed(&self) -> f64 {
        self.speed.value()
    }

    /// Last known scroll offset
    pub fn position(&self) -> f64 {
        self.position
    }
}

/// Drives a [`ScrollSurface`] at a bounded speed with a single repeating timer
pub struct AutoScrollController<T: TickScheduler> {
    config: AutoScrollConfig,
    scheduler: T,
    session: AutoScrollSession,
    pending_events: Vec<AutoScrollEvent>,
}

impl<T: TickScheduler> AutoScrollController<T> {
    /// Create an idle controller at the configured initial speed
    pub fn new(config: AutoScrollConfig, scheduler: T) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config, scheduler))
    }

    /// Create an idle controller at `speed` (clamped)
    pub fn with_speed(config: AutoScrollConfig, scheduler: T, speed: f64) -> Result<Self> {
        let mut controller = Self::new(config, scheduler)?;
        if !speed.is_nan() {
            controller.session.speed = ScrollSpeed::clamped(speed, &controller.config);
        }
        Ok(controller)
    }

    /// Build from a configuration already known to be valid
    pub(crate) fn from_validated(config: AutoScrollConfig, scheduler: T) -> Self {
        let speed = ScrollSpeed::clamped(config.initial_speed, &config);
        Self {
            config,
            scheduler,
            session: AutoScrollSession::new(speed),
            pending_events: Vec::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    /// Current session state
    pub fn session(&self) -> &AutoScrollSession {
        &self.session
    }

    /// Scheduler owned by this controller
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// Idle or running
    pub fn state(&self) -> ScrollState {
        if self.session.is_playing() {
            ScrollState::Running
        } else {
            ScrollState::Idle
        }
    }

    /// Whether ticks are being scheduled
    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Current speed multiplier
    pub fn speed(&self) -> f64 {
        self.session.speed()
    }

    /// Tracked scroll offset
    pub fn position(&self) -> f64 {
        self.session.position
    }

    /// Distance advanced per tick at the current speed
    pub fn step(&self) -> f64 {
        self.config.tick_step(self.speed())
    }

    /// Tick period at the current speed, in milliseconds
    pub fn interval_ms(&self) -> f64 {
        self.config.tick_interval_ms(self.speed())
    }

    /// Start scrolling. No effect while already running.
    pub fn start(&mut self) {
        if self.session.is_playing() {
            debug!("Auto-scroll already running");
            return;
        }

        self.arm();
        info!(
            speed = self.speed(),
            interval_ms = self.interval_ms(),
            position = self.session.position,
            "Auto-scroll started"
        );
        self.pending_events.push(AutoScrollEvent::Started {
            speed: self.speed(),
            interval_ms: self.interval_ms(),
            step: self.step(),
        });
    }

    /// Stop scrolling. No effect while idle.
    pub fn stop(&mut self) {
        if self.halt() {
            info!(position = self.session.position, "Auto-scroll stopped");
            self.pending_events.push(AutoScrollEvent::Stopped);
        }
    }

    /// Start when idle, stop when running
    pub fn toggle(&mut self) {
        if self.session.is_playing() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Set the speed multiplier and return the value actually applied
    ///
    /// Out-of-range values clamp to the nearest bound; NaN leaves the speed
    /// unchanged. While running, the old timer is cancelled before the new one
    /// is scheduled.
    pub fn change_speed(&mut self, speed: f64) -> f64 {
        if speed.is_nan() {
            warn!("Ignoring NaN auto-scroll speed");
            return self.speed();
        }

        let next = ScrollSpeed::clamped(speed, &self.config);
        if next == self.session.speed {
            return next.value();
        }

        self.session.speed = next;
        if self.halt() {
            self.arm();
        }

        debug!(
            requested = speed,
            speed = next.value(),
            interval_ms = self.interval_ms(),
            step = self.step(),
            running = self.session.is_playing(),
            "Auto-scroll speed changed"
        );
        self.pending_events.push(AutoScrollEvent::SpeedChanged {
            speed: next.value(),
            interval_ms: self.interval_ms(),
            step: self.step(),
        });
        next.value()
    }

    /// Raise the speed by one configured step
    pub fn speed_up(&mut self) -> f64 {
        let next = self.config.step_up(self.speed());
        self.change_speed(next)
    }

    /// Lower the speed by one configured step
    pub fn speed_down(&mut self) -> f64 {
        let next = self.config.step_down(self.speed());
        self.change_speed(next)
    }

    /// Deliver a timer firing
    ///
    /// Advances `surface` by one step when `timer` is the live timer and
    /// returns whether it did. Stale ids are dropped.
    pub fn on_tick<S: ScrollSurface + ?Sized>(&mut self, timer: TimerId, surface: &mut S) -> bool {
        if self.session.timer != Some(timer) {
            trace!(%timer, "Dropping stale auto-scroll tick");
            return false;
        }

        let step = self.step();
        surface.advance_by(step);
        self.session.position += step;
        true
    }

    /// Report a user interaction with the scrolled view
    ///
    /// While running this pauses scrolling and queues one
    /// [`AutoScrollEvent::AutoPaused`]; while idle it does nothing. Returns
    /// whether scrolling was paused.
    pub fn on_user_interaction(&mut self, interaction: Interaction) -> bool {
        if !self.halt() {
            return false;
        }

        info!(?interaction, position = self.session.position, "Auto-scroll paused by user");
        self.pending_events.push(AutoScrollEvent::AutoPaused { interaction });
        true
    }

    /// Report the view's scroll offset
    ///
    /// Taken over only while idle, so the next start continues from where the
    /// user left the view. While running the offset comes from our own ticks.
    pub fn on_position_changed(&mut self, position: f64) {
        if self.session.is_playing() || !position.is_finite() {
            return;
        }

        if position != self.session.position {
            debug!(
                from = self.session.position,
                to = position,
                "Auto-scroll position resynchronised"
            );
            self.session.position = position;
        }
    }

    /// Read the offset straight from `surface` (see [`Self::on_position_changed`])
    pub fn resync_from<S: ScrollSurface + ?Sized>(&mut self, surface: &S) {
        self.on_position_changed(surface.position());
    }

    /// Take all queued notifications
    pub fn drain_events(&mut self) -> Vec<AutoScrollEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether notifications are waiting
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Schedule a timer for the current speed
    fn arm(&mut self) {
        let interval = self.config.tick_interval(self.speed());
        let timer = self.scheduler.schedule_repeating(interval);
        trace!(%timer, ?interval, "Auto-scroll timer scheduled");
        self.session.timer = Some(timer);
    }

    /// Cancel the live timer, returning whether there was one
    fn halt(&mut self) -> bool {
        match self.session.timer.take() {
            Some(timer) => {
                self.scheduler.cancel(timer);
                trace!(%timer, "Auto-scroll timer cancelled");
                true
            }
            None => false,
        }
    }
}

impl<T: TickScheduler> Drop for AutoScrollController<T> {
    fn drop(&mut self) {
        if self.halt() {
            debug!("Auto-scroll timer released on teardown");
        }
    }
}

impl<T: TickScheduler> std::fmt::Debug for AutoScrollController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoScrollController")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("pending_events", &self.pending_events.len())
            .finish_non_exhaustive()
    }
}
