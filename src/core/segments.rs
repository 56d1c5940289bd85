//! Segment building
//!
//! Interleaves accepted math matches with the text between them. The segments
//! partition the escaped input: joined in order they reproduce it exactly.

use texspan_ir::{CandidateMatch, Segment};

/// Build the ordered segment list for `text` from sorted, non-overlapping
/// matches. Empty input yields no segments at all.
pub fn build_segments(text: &str, accepted: Vec<CandidateMatch>) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut previous_end = 0;

    for m in accepted {
        if previous_end < m.start {
            segments.push(Segment::text(&text[previous_end..m.start]));
        }
        previous_end = m.end;
        segments.push(Segment::math(m.mode, m.content));
    }

    if previous_end < text.len() {
        segments.push(Segment::text(&text[previous_end..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use texspan_ir::MathMode;

    #[test]
    fn test_empty_input_has_no_segments() {
        assert!(build_segments("", Vec::new()).is_empty());
    }

    #[test]
    fn test_text_only() {
        assert_eq!(
            build_segments("plain", Vec::new()),
            vec![Segment::text("plain")]
        );
    }

    #[test]
    fn test_leading_and_trailing_text() {
        let text = "Let $x$ be";
        let m = CandidateMatch::new(MathMode::Inline, "x", 4, 7);
        assert_eq!(
            build_segments(text, vec![m]),
            vec![
                Segment::text("Let "),
                Segment::math(MathMode::Inline, "x"),
                Segment::text(" be"),
            ]
        );
    }

    #[test]
    fn test_adjacent_math_has_no_empty_text_between() {
        let text = "$a$$b$";
        let matches = vec![
            CandidateMatch::new(MathMode::Inline, "a", 0, 3),
            CandidateMatch::new(MathMode::Inline, "b", 3, 6),
        ];
        assert_eq!(
            build_segments(text, matches),
            vec![
                Segment::math(MathMode::Inline, "a"),
                Segment::math(MathMode::Inline, "b"),
            ]
        );
    }
}
