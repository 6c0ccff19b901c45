//! Property-based tests for chord annotation
//!
//! Uses proptest to verify invariants across many random inputs.

use cifra_chords::{AnnotatedSegment, ChordAnnotator, Strictness};
use proptest::prelude::*;

// ===== Helpers =====

fn sheet_text() -> impl Strategy<Value = String> {
    prop_oneof![
        // Chord-heavy text with lyrics, accents and line breaks
        "[A-Gabmjdisu#/°0-9 \\n.,çãéAmor]{0,80}",
        // Anything at all
        any::<String>(),
    ]
}

fn strictness() -> impl Strategy<Value = Strictness> {
    prop_oneof![Just(Strictness::WordBoundary), Just(Strictness::Loose)]
}

// ===== Property Tests =====

proptest! {
    /// Property: concatenated segments reproduce the input exactly
    #[test]
    fn annotate_round_trips(text in sheet_text(), strictness in strictness()) {
        let annotator = ChordAnnotator::new(strictness);
        let rebuilt: String = annotator
            .annotate(&text)
            .iter()
            .map(AnnotatedSegment::text)
            .collect();

        prop_assert_eq!(rebuilt, text);
    }

    /// Property: the same input always yields the same tokens
    #[test]
    fn tokens_are_deterministic(text in sheet_text(), strictness in strictness()) {
        let annotator = ChordAnnotator::new(strictness);

        prop_assert_eq!(annotator.find_chord_tokens(&text), annotator.find_chord_tokens(&text));
    }

    /// Property: tokens are ordered, non-overlapping and slice the source
    #[test]
    fn tokens_are_ordered_and_disjoint(text in sheet_text(), strictness in strictness()) {
        let tokens = ChordAnnotator::new(strictness).find_chord_tokens(&text);

        for token in &tokens {
            prop_assert!(token.start < token.end);
            prop_assert_eq!(&text[token.range()], token.text.as_str());
        }
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    /// Property: contains/count agree with the token list
    #[test]
    fn contains_and_count_agree(text in sheet_text(), strictness in strictness()) {
        let annotator = ChordAnnotator::new(strictness);
        let tokens = annotator.find_chord_tokens(&text);

        prop_assert_eq!(annotator.count_chords(&text), tokens.len());
        prop_assert_eq!(annotator.contains_chord(&text), !tokens.is_empty());
    }

    /// Property: word-boundary tokens are a subset of what loose matching sees
    #[test]
    fn strict_never_finds_more_than_loose(text in sheet_text()) {
        let strict = ChordAnnotator::new(Strictness::WordBoundary).count_chords(&text);
        let loose = ChordAnnotator::new(Strictness::Loose).count_chords(&text);

        prop_assert!(strict <= loose, "strict {} > loose {}", strict, loose);
    }

    /// Property: joining annotated lines with newlines rebuilds the input
    #[test]
    fn lines_round_trip(text in sheet_text()) {
        let lines = ChordAnnotator::default().annotate_lines(&text);
        let rebuilt: Vec<String> = lines.iter().map(|line| line.text()).collect();

        prop_assert_eq!(rebuilt.join("\n"), text);
    }
}
