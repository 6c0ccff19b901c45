//! Cifra Player - Chord Annotation
//!
//! Detects chord symbols inside free-form song-sheet text and splits the text
//! into plain and chord segments for highlighted rendering.
//!
//! This crate provides:
//! - Chord token detection (`C`, `Am`, `F#m7b5`, `C7M`, `G/B`, ...)
//! - Lossless annotation into ordered segments
//! - Per-line annotation (chord rows vs lyric rows)
//! - HTML highlighting for web previews
//!
//! # Matching strictness
//!
//! The two clients historically disagreed on word boundaries. Both behaviours
//! are available through [`Strictness`]:
//! - [`Strictness::WordBoundary`] (default) rejects tokens glued to letters or
//!   digits, so `"Amor"` contains no chord.
//! - [`Strictness::Loose`] accepts any match, so `"Amor"` yields `"Am"`.
//!
//! Bare root letters are always chords: the article `"A"` in lyrics is matched.
//! This is the accepted cost of a lightweight heuristic.
//!
//! # Example
//!
//! ```rust
//! use cifra_chords::{annotate, count_chords, find_chord_tokens, AnnotatedSegment};
//!
//! let tokens = find_chord_tokens("C Am F G");
//! let names: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(names, vec!["C", "Am", "F", "G"]);
//! assert_eq!(count_chords("C Am F G"), 4);
//!
//! let segments = annotate("G7 Saudade");
//! assert!(matches!(segments[0], AnnotatedSegment::Chord(_)));
//! let rebuilt: String = segments.iter().map(|s| s.text()).collect();
//! assert_eq!(rebuilt, "G7 Saudade");
//! ```

mod annotator;
mod html;
mod lines;
pub mod types;

use std::sync::OnceLock;

pub use annotator::{ChordAnnotator, Strictness};
pub use html::CHORD_CLASS;
pub use types::{AnnotatedLine, AnnotatedSegment, ChordToken};

/// Shared word-boundary annotator behind the free functions
pub fn default_annotator() -> &'static ChordAnnotator {
    static ANNOTATOR: OnceLock<ChordAnnotator> = OnceLock::new();
    ANNOTATOR.get_or_init(ChordAnnotator::default)
}

/// Find every chord token in `text`, in source order
pub fn find_chord_tokens(text: &str) -> Vec<ChordToken> {
    default_annotator().find_chord_tokens(text)
}

/// Split `text` into plain and chord segments
pub fn annotate(text: &str) -> Vec<AnnotatedSegment> {
    default_annotator().annotate(text)
}

/// Annotate `text` line by line
pub fn annotate_lines(text: &str) -> Vec<AnnotatedLine> {
    default_annotator().annotate_lines(text)
}

/// Render `text` as HTML with chords wrapped in `<span class="chord">`
pub fn highlight_html(text: &str) -> String {
    default_annotator().highlight_html(text)
}

/// Whether `text` contains at least one chord
pub fn contains_chord(text: &str) -> bool {
    default_annotator().contains_chord(text)
}

/// Number of chords in `text`
pub fn count_chords(text: &str) -> usize {
    default_annotator().count_chords(text)
}

/// Whether `line` holds only chords and whitespace
pub fn is_chord_line(line: &str) -> bool {
    default_annotator().is_chord_line(line)
}
