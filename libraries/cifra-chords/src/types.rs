//! Chord token and segment types

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A substring of the source recognised as a chord symbol
///
/// `start` and `end` are UTF-8 byte offsets into the source text (half-open),
/// so `&source[start..end] == text` always holds. Use [`ChordToken::char_range`]
/// when a renderer needs Unicode scalar offsets instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordToken {
    /// Exact matched text (e.g. "C7M", "F#m7b5", "Bb")
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl ChordToken {
    /// Create a token from its matched text and start offset
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self { text, start, end }
    }

    /// Byte range of the token in the source
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Range of the token counted in Unicode scalars of `source`
    pub fn char_range(&self, source: &str) -> Range<usize> {
        let start = source[..self.start].chars().count();
        start..start + self.text.chars().count()
    }

    /// Move the token by `offset` bytes
    pub(crate) fn shifted(mut self, offset: usize) -> Self {
        self.start += offset;
        self.end += offset;
        self
    }
}

/// One piece of annotated text: either literal text or a chord
///
/// Concatenating the text of every segment of an annotation, in order,
/// reproduces the source exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnnotatedSegment {
    /// Literal text between chords (whitespace and newlines included)
    Text {
        /// The literal text
        text: String,
        /// Byte offset of the segment in the source
        start: usize,
    },
    /// A recognised chord
    Chord(ChordToken),
}

impl AnnotatedSegment {
    /// Text of the segment
    pub fn text(&self) -> &str {
        match self {
            AnnotatedSegment::Text { text, .. } => text,
            AnnotatedSegment::Chord(token) => &token.text,
        }
    }

    /// Byte range of the segment in the source
    pub fn range(&self) -> Range<usize> {
        match self {
            AnnotatedSegment::Text { text, start } => *start..*start + text.len(),
            AnnotatedSegment::Chord(token) => token.range(),
        }
    }

    /// Whether this segment is a chord
    pub fn is_chord(&self) -> bool {
        matches!(self, AnnotatedSegment::Chord(_))
    }

    /// The chord token, if this segment is one
    pub fn as_chord(&self) -> Option<&ChordToken> {
        match self {
            AnnotatedSegment::Chord(token) => Some(token),
            AnnotatedSegment::Text { .. } => None,
        }
    }

    /// Move the segment by `offset` bytes
    pub(crate) fn shifted(self, offset: usize) -> Self {
        match self {
            AnnotatedSegment::Text { text, start } => AnnotatedSegment::Text {
                text,
                start: start + offset,
            },
            AnnotatedSegment::Chord(token) => AnnotatedSegment::Chord(token.shifted(offset)),
        }
    }
}

/// One source line with its segments
///
/// Segment offsets stay relative to the whole source, not the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedLine {
    /// Zero-based line number
    pub index: usize,
    /// Segments of the line, without the trailing newline
    pub segments: Vec<AnnotatedSegment>,
    /// Whether the line holds only chords and whitespace
    pub is_chord_line: bool,
}

impl AnnotatedLine {
    /// Line text without the trailing newline
    pub fn text(&self) -> String {
        self.segments.iter().map(AnnotatedSegment::text).collect()
    }

    /// Chords found on this line
    pub fn chords(&self) -> impl Iterator<Item = &ChordToken> {
        self.segments.iter().filter_map(AnnotatedSegment::as_chord)
    }
}
