//! Song sheet screen model
//!
//! One [`SheetViewer`] backs one open sheet screen: the annotated sheet of a
//! song, or of every song of a potpourri in play order, plus the auto-scroll
//! session for that screen.

use crate::error::Result;
use cifra_autoscroll::{AutoScrollConfig, AutoScrollController, TickScheduler};
use cifra_chords::{AnnotatedLine, ChordAnnotator};
use cifra_core::{CifraError, Potpourri, Song, SongId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One song's sheet, ready to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSection {
    /// Song the sheet belongs to
    pub song_id: SongId,
    /// Song name
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Position in the potpourri, `None` for a single song
    pub play_order: Option<i32>,
    /// Annotated sheet lines (empty when the song has no sheet)
    pub lines: Vec<AnnotatedLine>,
    /// Chords on the whole sheet
    pub chord_count: usize,
}

impl SheetSection {
    fn build(song: &Song, play_order: Option<i32>, annotator: &ChordAnnotator) -> Self {
        let lines = annotator.annotate_lines(song.sheet_text());
        let chord_count = lines.iter().map(|line| line.chords().count()).sum();

        Self {
            song_id: song.id,
            title: song.name.clone(),
            artist: song.artist.clone(),
            play_order,
            lines,
            chord_count,
        }
    }

    /// Whether the song had no sheet text
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Annotated sheets and the auto-scroll session of one screen
pub struct SheetViewer<T: TickScheduler> {
    title: String,
    sections: Vec<SheetSection>,
    controller: AutoScrollController<T>,
}

impl<T: TickScheduler> SheetViewer<T> {
    /// Open a single song with the default annotator
    ///
    /// Scrolling starts idle at the song's stored speed, clamped to the
    /// configured range.
    pub fn for_song(song: &Song, config: AutoScrollConfig, scheduler: T) -> Result<Self> {
        Self::for_song_with(song, config, scheduler, cifra_chords::default_annotator())
    }

    /// Open a single song with a specific annotator
    pub fn for_song_with(
        song: &Song,
        config: AutoScrollConfig,
        scheduler: T,
        annotator: &ChordAnnotator,
    ) -> Result<Self> {
        let speed = initial_speed(song, &config);
        let controller = AutoScrollController::with_speed(config, scheduler, speed)?;
        let section = SheetSection::build(song, None, annotator);

        debug!(
            song_id = song.id,
            lines = section.lines.len(),
            chords = section.chord_count,
            speed = controller.speed(),
            "Opened song sheet"
        );

        Ok(Self {
            title: song.name.clone(),
            sections: vec![section],
            controller,
        })
    }

    /// Open a potpourri with the default annotator
    ///
    /// Each entry's song comes from the entry itself when the payload embeds
    /// it, otherwise from `songs`. The first song's stored speed seeds the
    /// scroll speed.
    pub fn for_potpourri(
        potpourri: &Potpourri,
        songs: &[Song],
        config: AutoScrollConfig,
        scheduler: T,
    ) -> Result<Self> {
        Self::for_potpourri_with(
            potpourri,
            songs,
            config,
            scheduler,
            cifra_chords::default_annotator(),
        )
    }

    /// Open a potpourri with a specific annotator
    pub fn for_potpourri_with(
        potpourri: &Potpourri,
        songs: &[Song],
        config: AutoScrollConfig,
        scheduler: T,
        annotator: &ChordAnnotator,
    ) -> Result<Self> {
        let mut ordered = Vec::with_capacity(potpourri.entries.len());
        for entry in potpourri.ordered_entries() {
            let song = entry
                .song
                .as_ref()
                .or_else(|| songs.iter().find(|song| song.id == entry.song_id))
                .ok_or_else(|| CifraError::not_found("Song", entry.song_id.to_string()))?;
            ordered.push((song, entry.play_order));
        }

        let speed = ordered
            .first()
            .map_or(config.initial_speed, |(song, _)| initial_speed(song, &config));
        let controller = AutoScrollController::with_speed(config, scheduler, speed)?;

        let sections: Vec<SheetSection> = ordered
            .into_iter()
            .map(|(song, order)| SheetSection::build(song, Some(order), annotator))
            .collect();

        info!(
            potpourri_id = potpourri.id,
            songs = sections.len(),
            speed = controller.speed(),
            "Opened potpourri sheet"
        );

        Ok(Self {
            title: potpourri.name.clone(),
            sections,
            controller,
        })
    }

    /// Song or potpourri name
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sheets in display order
    pub fn sections(&self) -> &[SheetSection] {
        &self.sections
    }

    /// Chords across every section
    pub fn total_chords(&self) -> usize {
        self.sections.iter().map(|s| s.chord_count).sum()
    }

    /// Auto-scroll state for display
    pub fn controller(&self) -> &AutoScrollController<T> {
        &self.controller
    }

    /// Auto-scroll controls (play/pause, speed, interactions)
    pub fn controller_mut(&mut self) -> &mut AutoScrollController<T> {
        &mut self.controller
    }

    /// Speed to persist back into the song record
    pub fn current_speed_for_save(&self) -> f64 {
        self.controller.speed()
    }

    /// Copy the current speed into `song` before saving it
    pub fn apply_speed_to(&self, song: &mut Song) {
        song.stored_scroll_speed = Some(self.current_speed_for_save());
    }
}

fn initial_speed(song: &Song, config: &AutoScrollConfig) -> f64 {
    match song.stored_scroll_speed {
        Some(_) => song.scroll_speed(),
        None => config.initial_speed,
    }
}
