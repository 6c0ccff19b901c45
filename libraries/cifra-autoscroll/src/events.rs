//! Notifications raised by the controller

use serde::{Deserialize, Serialize};

/// A user action that interrupts auto-scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    /// Mouse wheel or trackpad scroll
    Wheel,
    /// Finger placed on the screen
    Touch,
    /// Keyboard navigation (arrows, page keys, space)
    KeyPress,
    /// Scroll gesture reported by the view itself
    ManualScroll,
}

impl Interaction {
    /// Parse the DOM-style names hosts usually have at hand
    ///
    /// A bare `scroll` event is not an interaction: the auto-scroll's own
    /// movement fires it too. Hosts route it to the position report instead.
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "wheel" => Some(Self::Wheel),
            "touch" | "touchstart" => Some(Self::Touch),
            "key" | "keydown" | "key_press" => Some(Self::KeyPress),
            "manual_scroll" => Some(Self::ManualScroll),
            _ => None,
        }
    }
}

/// State change the UI may want to surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AutoScrollEvent {
    /// Ticks started
    Started {
        /// Current speed multiplier
        speed: f64,
        /// Tick period in milliseconds
        interval_ms: f64,
        /// Distance per tick
        step: f64,
    },
    /// Ticks stopped by an explicit stop or toggle
    Stopped,
    /// Speed changed (while running or idle)
    SpeedChanged {
        /// New speed multiplier
        speed: f64,
        /// Tick period in milliseconds at the new speed
        interval_ms: f64,
        /// Distance per tick at the new speed
        step: f64,
    },
    /// Ticks stopped because the user took over scrolling
    AutoPaused {
        /// What the user did
        interaction: Interaction,
    },
}
