//! HTML highlighting for the web preview

use crate::annotator::ChordAnnotator;
use crate::types::AnnotatedSegment;

/// CSS class put on every highlighted chord
pub const CHORD_CLASS: &str = "chord";

impl ChordAnnotator {
    /// Render `text` as HTML, wrapping each chord in `<span class="chord">`
    ///
    /// Everything else is HTML-escaped and kept verbatim, newlines included.
    pub fn highlight_html(&self, text: &str) -> String {
        let mut html = String::with_capacity(text.len() + text.len() / 2);

        for segment in self.annotate(text) {
            match segment {
                AnnotatedSegment::Text { text, .. } => escape_into(&mut html, &text),
                AnnotatedSegment::Chord(token) => {
                    html.push_str("<span class=\"");
                    html.push_str(CHORD_CLASS);
                    html.push_str("\">");
                    escape_into(&mut html, &token.text);
                    html.push_str("</span>");
                }
            }
        }

        html
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
