//! Cifra Player - Auto-Scroll
//!
//! Platform-agnostic auto-scroll for song sheets.
//!
//! This crate provides:
//! - A bounded speed multiplier with per-client presets (web, mobile)
//! - A tick-rate formula: faster speeds advance more per tick and tick more
//!   often, down to a floor interval
//! - A start/stop/speed state machine that owns exactly one repeating timer
//! - Auto-pause when the user scrolls, touches or types
//!
//! # Architecture
//!
//! The controller never sleeps, spawns or reads a clock. Hosts plug in:
//! - a [`ScrollSurface`] (what gets scrolled)
//! - a [`TickScheduler`] (where repeating timers come from)
//!
//! Adapters ship for tokio ([`driver`], feature `tokio-driver`), the browser
//! (`wasm`, feature `wasm`) and a deterministic [`VirtualScheduler`] for tests
//! and frame-loop hosts.
//!
//! # Example
//!
//! ```rust
//! use cifra_autoscroll::{AutoScrollConfig, AutoScrollController, DeltaSurface, VirtualScheduler};
//! use std::time::Duration;
//!
//! let clock = VirtualScheduler::new();
//! let mut controller = AutoScrollController::new(AutoScrollConfig::web(), clock.clone()).unwrap();
//!
//! let mut scrolled = 0.0;
//! let mut surface = DeltaSurface::new(|delta| scrolled += delta);
//!
//! controller.start();
//! for timer in clock.advance(Duration::from_millis(200)) {
//!     controller.on_tick(timer, &mut surface);
//! }
//! controller.stop();
//! drop(surface);
//!
//! // Speed 1.0 on the web preset: one unit every 50 ms
//! assert_eq!(scrolled, 4.0);
//! assert_eq!(clock.active_timers(), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod scheduler;
pub mod surface;

#[cfg(feature = "tokio-driver")]
pub mod driver;

pub mod wasm;

pub use config::AutoScrollConfig;
pub use controller::{AutoScrollController, AutoScrollSession, ScrollSpeed, ScrollState};
pub use error::{AutoScrollError, Result};
pub use events::{AutoScrollEvent, Interaction};
pub use scheduler::{TickScheduler, TimerId, VirtualScheduler};
pub use surface::{DeltaSurface, OffsetSurface, ScrollSurface};

#[cfg(feature = "tokio-driver")]
pub use driver::{
    AutoScrollCommand, AutoScrollDriver, AutoScrollHandle, EventReceiver, TokioScheduler,
};

#[cfg(feature = "wasm")]
pub use wasm::WasmAutoScroll;
