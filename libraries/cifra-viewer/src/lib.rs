//! Cifra Player - Sheet Viewer
//!
//! Screen model shared by the web and mobile sheet pages: chord-annotated
//! sheets for a song or a potpourri, and the auto-scroll session that scrolls
//! them.
//!
//! # Example
//!
//! ```rust
//! use cifra_autoscroll::{AutoScrollConfig, VirtualScheduler};
//! use cifra_core::Song;
//! use cifra_viewer::SheetViewer;
//!
//! let song = Song::new(1, "Asa Branca", "Luiz Gonzaga", "https://example.com/asa-branca")
//!     .with_sheet("G       D7\nQuando olhei a terra ardendo")
//!     .with_scroll_speed(1.5);
//!
//! let mut viewer = SheetViewer::for_song(&song, AutoScrollConfig::web(), VirtualScheduler::new()).unwrap();
//!
//! let section = &viewer.sections()[0];
//! assert!(section.lines[0].is_chord_line);
//! assert_eq!(section.chord_count, 2);
//!
//! viewer.controller_mut().speed_up();
//! assert_eq!(viewer.current_speed_for_save(), 1.6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod viewer;

pub use error::{Result, ViewerError};
pub use viewer::{SheetSection, SheetViewer};
