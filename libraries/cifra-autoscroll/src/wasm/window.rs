//! `window` backed scheduler and surface

use crate::scheduler::{TickScheduler, TimerId};
use crate::surface::ScrollSurface;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Callback invoked with the id of a firing timer
pub type TickCallback = Rc<dyn Fn(TimerId)>;

struct IntervalTimer {
    handle: i32,
    // Kept alive for as long as the browser may call it
    _callback: Closure<dyn FnMut()>,
}

/// Scheduler built on `setInterval` / `clearInterval`
pub struct WindowScheduler {
    window: Window,
    on_tick: TickCallback,
    timers: HashMap<TimerId, IntervalTimer>,
    next_id: u64,
}

impl WindowScheduler {
    /// Create a scheduler that reports firings to `on_tick`
    pub fn new(window: Window, on_tick: TickCallback) -> Self {
        Self {
            window,
            on_tick,
            timers: HashMap::new(),
            next_id: 0,
        }
    }
}

impl TickScheduler for WindowScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        let id = TimerId::new(self.next_id);
        self.next_id += 1;

        let on_tick = Rc::clone(&self.on_tick);
        let callback = Closure::<dyn FnMut()>::new(move || on_tick(id));
        let millis = i32::try_from(interval.as_millis()).unwrap_or(i32::MAX);

        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => {
                self.timers.insert(
                    id,
                    IntervalTimer {
                        handle,
                        _callback: callback,
                    },
                );
            }
            Err(e) => warn!(error = ?e, "setInterval failed, auto-scroll will not tick"),
        }

        id
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(entry) = self.timers.remove(&timer) {
            self.window.clear_interval_with_handle(entry.handle);
        }
    }
}

impl Drop for WindowScheduler {
    fn drop(&mut self) {
        for (_, entry) in self.timers.drain() {
            self.window.clear_interval_with_handle(entry.handle);
        }
    }
}

/// The page itself, scrolled with `window.scrollBy`
pub struct WindowSurface {
    window: Window,
}

impl WindowSurface {
    /// Wrap the browser window
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ScrollSurface for WindowSurface {
    fn advance_by(&mut self, amount: f64) {
        self.window.scroll_by_with_x_and_y(0.0, amount);
    }

    fn position(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}
