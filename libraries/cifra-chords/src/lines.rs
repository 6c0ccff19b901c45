//! Line-by-line annotation
//!
//! Song sheets alternate chord rows and lyric rows. Renderers draw one row per
//! source line, so the annotation is split on `\n` while segment offsets keep
//! pointing into the whole sheet.

use crate::annotator::{only_chords, ChordAnnotator};
use crate::types::AnnotatedLine;

impl ChordAnnotator {
    /// Annotate `text` one line at a time
    ///
    /// Returns no lines for empty input. A trailing `\r` stays in the last text
    /// segment of its line.
    pub fn annotate_lines(&self, text: &str) -> Vec<AnnotatedLine> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut offset = 0;
        text.split('\n')
            .enumerate()
            .map(|(index, line)| {
                let segments: Vec<_> = self
                    .annotate(line)
                    .into_iter()
                    .map(|segment| segment.shifted(offset))
                    .collect();
                offset += line.len() + 1;

                AnnotatedLine {
                    index,
                    is_chord_line: only_chords(&segments),
                    segments,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChordAnnotator, Strictness};

    const SHEET: &str = "C           Am          F           G\n\
                         Tocando a guitarra, cantando uma canção\n\
                         \n\
                         F           G           C";

    #[test]
    fn splits_into_rows() {
        let lines = ChordAnnotator::default().annotate_lines(SHEET);

        assert_eq!(lines.len(), 4);
        assert!(lines[0].is_chord_line);
        assert_eq!(lines[0].chords().count(), 4);
        assert!(!lines[1].is_chord_line);
        assert!(lines[2].segments.is_empty());
        assert!(lines[3].is_chord_line);
        assert_eq!(lines[3].index, 3);
    }

    #[test]
    fn offsets_point_into_whole_text() {
        let lines = ChordAnnotator::default().annotate_lines(SHEET);

        for line in &lines {
            for chord in line.chords() {
                assert_eq!(&SHEET[chord.range()], chord.text);
            }
        }
    }

    #[test]
    fn joined_lines_rebuild_source() {
        let text = "Am\r\nla la\n\nG\n";
        let lines = ChordAnnotator::new(Strictness::Loose).annotate_lines(text);

        let rebuilt: Vec<String> = lines.iter().map(|line| line.text()).collect();
        assert_eq!(rebuilt.join("\n"), text);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(ChordAnnotator::default().annotate_lines("").is_empty());
    }
}
