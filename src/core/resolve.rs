//! Overlap resolution
//!
//! Candidates are ordered by start offset, longest first at equal starts, and
//! swept left to right. A candidate is kept only if it starts at or after the
//! end of the last kept one. Anything nested in or straddling a kept span is
//! dropped and stays part of that span's raw content.

use std::cmp::Reverse;

use texspan_ir::CandidateMatch;

/// Reduce candidates to a sorted, non-overlapping list.
pub fn resolve_overlaps(mut candidates: Vec<CandidateMatch>) -> Vec<CandidateMatch> {
    // Stable, so equal keys keep table order.
    candidates.sort_by_key(|c| (c.start, Reverse(c.len())));

    let mut accepted = Vec::with_capacity(candidates.len());
    let mut cursor = 0;
    for candidate in candidates {
        if candidate.start >= cursor {
            cursor = candidate.end;
            accepted.push(candidate);
        } else {
            tracing::trace!(
                start = candidate.start,
                end = candidate.end,
                mode = %candidate.mode,
                cursor,
                "dropped overlapping candidate"
            );
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use texspan_ir::MathMode;

    fn inline(start: usize, end: usize) -> CandidateMatch {
        CandidateMatch::new(MathMode::Inline, "", start, end)
    }

    fn display(start: usize, end: usize) -> CandidateMatch {
        CandidateMatch::new(MathMode::Display, "", start, end)
    }

    #[test]
    fn test_longer_wins_at_same_start() {
        let out = resolve_overlaps(vec![inline(0, 2), inline(3, 5), display(0, 5)]);
        assert_eq!(out, vec![display(0, 5)]);
    }

    #[test]
    fn test_nested_candidates_are_dropped() {
        let out = resolve_overlaps(vec![inline(5, 8), display(0, 13), inline(11, 13)]);
        assert_eq!(out, vec![display(0, 13)]);
    }

    #[test]
    fn test_partial_overlap_keeps_earlier_start() {
        let out = resolve_overlaps(vec![display(4, 12), inline(0, 6)]);
        assert_eq!(out, vec![inline(0, 6)]);
    }

    #[test]
    fn test_adjacent_spans_are_both_kept() {
        let out = resolve_overlaps(vec![inline(3, 6), inline(0, 3)]);
        assert_eq!(out, vec![inline(0, 3), inline(3, 6)]);
    }

    #[test]
    fn test_result_independent_of_input_order() {
        let a = vec![inline(0, 2), display(0, 9), inline(4, 7), inline(10, 12)];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(resolve_overlaps(a), resolve_overlaps(b));
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_overlaps(Vec::new()).is_empty());
    }
}
