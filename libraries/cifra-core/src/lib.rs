//! Cifra Player Core
//!
//! Platform-agnostic domain types and error handling shared by the Cifra Player
//! libraries.
//!
//! The REST backend owns persistence and validation. This crate only models the
//! records the clients receive from it, so the sheet viewer can hand a song's
//! chord sheet to the annotator and its stored scroll speed to the auto-scroll
//! controller.
//!
//! # Example
//!
//! ```rust
//! use cifra_core::types::{Potpourri, PotpourriEntry, Song};
//!
//! let song = Song::new(1, "Garota de Ipanema", "Tom Jobim", "https://example.com/ipanema")
//!     .with_sheet("Fmaj7        G7\nOlha que coisa mais linda")
//!     .with_scroll_speed(1.5);
//!
//! assert_eq!(song.scroll_speed(), 1.5);
//!
//! let potpourri = Potpourri::new(7, "Bossa Nova")
//!     .with_entries(vec![PotpourriEntry::new(3, 2), PotpourriEntry::new(song.id, 1)]);
//!
//! let order: Vec<_> = potpourri.ordered_entries().iter().map(|e| e.song_id).collect();
//! assert_eq!(order, vec![1, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{CifraError, Result};
pub use types::{Page, Pagination, Potpourri, PotpourriEntry, PotpourriId, Song, SongId};
