//! WASM bindings for cifra-autoscroll
//!
//! Browser adapter: `window.setInterval` provides the ticks and
//! `window.scrollBy` moves the page.

#[cfg(feature = "wasm")]
pub mod window;

#[cfg(feature = "wasm")]
pub mod scroller;

#[cfg(feature = "wasm")]
pub use scroller::WasmAutoScroll;

#[cfg(feature = "wasm")]
pub use window::{WindowScheduler, WindowSurface};
