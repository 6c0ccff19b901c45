//! Chord token matcher
//!
//! A chord is a root letter `A`-`G`, then optionally: an accidental (`#`/`b`),
//! a quality (`maj`, `min`, `dim`, `aug`, `sus`, `add`, `m`, `M`, `°`),
//! extension digits, the `M` of the `7M` spelling, alterations (`b5`, `#9`)
//! and a slash bass (`/F#`).
//!
//! Matching runs left to right in a single pass. Each match is consumed before
//! the scan continues, so tokens never overlap.

use crate::types::{AnnotatedSegment, ChordToken};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Token grammar shared by both strictness levels
///
/// Quality alternatives are ordered longest first: the engine prefers the
/// leftmost alternative, and `m` must not shadow `maj`/`min`.
const CHORD_BODY: &str =
    r"[A-G][#b]?(?:maj|min|dim|aug|sus|add|m|M|°)?[0-9]*M?(?:[#b][0-9]*)?(?:/[A-G][#b]?)?";

/// How strictly chord tokens must be separated from surrounding text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Reject tokens glued to letters or digits ("Amor" has no chord)
    #[default]
    WordBoundary,

    /// Accept any match, even inside words ("Amor" yields "Am")
    Loose,
}

impl Strictness {
    fn pattern(self) -> String {
        match self {
            // The trailing class consumes the separator (or end of text) because
            // the regex engine has no look-ahead. It can never be the start of the
            // next token, which always begins with a letter. A `/` not followed by
            // a bass note ("D7/9") is a separator too.
            Strictness::WordBoundary => format!(r"\b(?P<chord>{CHORD_BODY})(?:[^\w#°]|$)"),
            Strictness::Loose => format!(r"(?P<chord>{CHORD_BODY})"),
        }
    }
}

/// Compiled chord matcher for one strictness level
///
/// Compile once and reuse; every method is pure and deterministic.
#[derive(Debug, Clone)]
pub struct ChordAnnotator {
    strictness: Strictness,
    pattern: Regex,
}

impl ChordAnnotator {
    /// Create an annotator with the given strictness
    pub fn new(strictness: Strictness) -> Self {
        let pattern = Regex::new(&strictness.pattern()).expect("chord pattern is valid");
        Self {
            strictness,
            pattern,
        }
    }

    /// Strictness this annotator was built with
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Find every chord token in `text`, in ascending offset order
    ///
    /// Returns an empty vector for empty input.
    pub fn find_chord_tokens(&self, text: &str) -> Vec<ChordToken> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.name("chord"))
            .map(|m| ChordToken::new(m.as_str(), m.start()))
            .collect()
    }

    /// Split `text` into literal and chord segments
    ///
    /// Concatenating the segment texts gives back `text` unchanged.
    pub fn annotate(&self, text: &str) -> Vec<AnnotatedSegment> {
        let tokens = self.find_chord_tokens(text);
        let mut segments = Vec::with_capacity(tokens.len() * 2 + 1);
        let mut cursor = 0;

        for token in tokens {
            if token.start > cursor {
                segments.push(AnnotatedSegment::Text {
                    text: text[cursor..token.start].to_string(),
                    start: cursor,
                });
            }
            cursor = token.end;
            segments.push(AnnotatedSegment::Chord(token));
        }

        if cursor < text.len() {
            segments.push(AnnotatedSegment::Text {
                text: text[cursor..].to_string(),
                start: cursor,
            });
        }

        trace!(
            bytes = text.len(),
            segments = segments.len(),
            strictness = ?self.strictness,
            "Annotated text"
        );

        segments
    }

    /// Whether `text` contains at least one chord
    pub fn contains_chord(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Number of chords in `text`
    pub fn count_chords(&self, text: &str) -> usize {
        self.pattern.captures_iter(text).count()
    }

    /// Whether `line` holds at least one chord and nothing but whitespace besides
    pub fn is_chord_line(&self, line: &str) -> bool {
        only_chords(&self.annotate(line))
    }
}

impl Default for ChordAnnotator {
    fn default() -> Self {
        Self::new(Strictness::default())
    }
}

/// At least one chord, and every text segment is whitespace
pub(crate) fn only_chords(segments: &[AnnotatedSegment]) -> bool {
    segments.iter().any(AnnotatedSegment::is_chord)
        && segments.iter().all(|segment| match segment {
            AnnotatedSegment::Text { text, .. } => text.trim().is_empty(),
            AnnotatedSegment::Chord(_) => true,
        })
}
