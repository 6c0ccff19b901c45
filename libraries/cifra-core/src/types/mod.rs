//! Domain records received from the song-sheet backend

mod page;
mod potpourri;
mod song;

pub use page::{Page, Pagination};
pub use potpourri::{Potpourri, PotpourriEntry, PotpourriId};
pub use song::{Song, SongId, DEFAULT_SCROLL_SPEED};
