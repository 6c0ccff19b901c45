//! JavaScript-facing auto-scroll controller

use super::window::{TickCallback, WindowScheduler, WindowSurface};
use crate::config::AutoScrollConfig;
use crate::controller::AutoScrollController;
use crate::events::{AutoScrollEvent, Interaction};
use js_sys::Function;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

struct PageState {
    controller: AutoScrollController<WindowScheduler>,
    surface: WindowSurface,
}

/// Auto-scroll for the current page
///
/// Dropping it (`free()` from JavaScript) clears the interval.
#[wasm_bindgen]
pub struct WasmAutoScroll {
    state: Rc<RefCell<PageState>>,
    on_event: Option<Function>,
}

#[wasm_bindgen]
impl WasmAutoScroll {
    /// Create an idle controller
    ///
    /// `config` is an optional object with any of the `AutoScrollConfig`
    /// fields; missing fields take the web defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmAutoScroll, JsValue> {
        console_error_panic_hook::set_once();

        let config: AutoScrollConfig = if config.is_undefined() || config.is_null() {
            AutoScrollConfig::web()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;

        let state = Rc::new_cyclic(|weak: &Weak<RefCell<PageState>>| {
            let weak = weak.clone();
            let on_tick: TickCallback = Rc::new(move |timer| {
                let Some(state) = weak.upgrade() else { return };
                if let Ok(mut state) = state.try_borrow_mut() {
                    let PageState {
                        controller,
                        surface,
                    } = &mut *state;
                    controller.on_tick(timer, surface);
                }
            });

            RefCell::new(PageState {
                controller: AutoScrollController::from_validated(
                    config,
                    WindowScheduler::new(window.clone(), on_tick),
                ),
                surface: WindowSurface::new(window),
            })
        });

        Ok(Self {
            state,
            on_event: None,
        })
    }

    // ===== Controls =====

    /// Start scrolling
    pub fn start(&mut self) {
        self.with_controller(AutoScrollController::start);
    }

    /// Stop scrolling
    pub fn stop(&mut self) {
        self.with_controller(AutoScrollController::stop);
    }

    /// Start or stop
    pub fn toggle(&mut self) {
        self.with_controller(AutoScrollController::toggle);
    }

    /// Set the speed multiplier; returns the clamped value
    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, speed: f64) -> f64 {
        self.with_controller(|c| c.change_speed(speed))
    }

    /// One step faster; returns the new speed
    #[wasm_bindgen(js_name = speedUp)]
    pub fn speed_up(&mut self) -> f64 {
        self.with_controller(AutoScrollController::speed_up)
    }

    /// One step slower; returns the new speed
    #[wasm_bindgen(js_name = speedDown)]
    pub fn speed_down(&mut self) -> f64 {
        self.with_controller(AutoScrollController::speed_down)
    }

    // ===== Host notifications =====

    /// Report a DOM event (`wheel`, `touchstart`, `keydown`)
    ///
    /// Returns true when it paused scrolling. Plain `scroll` events go to
    /// `onScroll`, since auto-scrolling fires them as well.
    #[wasm_bindgen(js_name = onUserInteraction)]
    pub fn on_user_interaction(&mut self, event_name: &str) -> bool {
        match Interaction::from_event_name(event_name) {
            Some(interaction) => self.with_controller(|c| c.on_user_interaction(interaction)),
            None => false,
        }
    }

    /// Report that the page was scrolled
    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(&mut self) {
        let mut state = self.state.borrow_mut();
        let PageState {
            controller,
            surface,
        } = &mut *state;
        controller.resync_from(&*surface);
    }

    // ===== State =====

    /// Whether ticks are scheduled
    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.state.borrow().controller.is_playing()
    }

    /// Current speed multiplier
    pub fn speed(&self) -> f64 {
        self.state.borrow().controller.speed()
    }

    /// Minimum speed of the configured range
    #[wasm_bindgen(js_name = minSpeed)]
    pub fn min_speed(&self) -> f64 {
        self.state.borrow().controller.config().min_speed
    }

    /// Maximum speed of the configured range
    #[wasm_bindgen(js_name = maxSpeed)]
    pub fn max_speed(&self) -> f64 {
        self.state.borrow().controller.config().max_speed
    }

    // ===== Event Callbacks =====

    /// Register a callback receiving every notification as a plain object
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&mut self, callback: Function) {
        self.on_event = Some(callback);
    }

    // ===== Private Helpers =====

    fn with_controller<R>(
        &mut self,
        f: impl FnOnce(&mut AutoScrollController<WindowScheduler>) -> R,
    ) -> R {
        let (result, events) = {
            let mut state = self.state.borrow_mut();
            let result = f(&mut state.controller);
            (result, state.controller.drain_events())
        };
        self.emit(&events);
        result
    }

    fn emit(&self, events: &[AutoScrollEvent]) {
        let Some(cb) = &self.on_event else { return };
        for event in events {
            if let Ok(js_event) = serde_wasm_bindgen::to_value(event) {
                cb.call1(&JsValue::NULL, &js_event).ok();
            }
        }
    }
}
