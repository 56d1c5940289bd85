//! Delimiter table and candidate scanning
//!
//! Every delimiter scans the escaped text independently. Matches of one
//! delimiter never overlap each other; matches of different delimiters may,
//! and are sorted out by [`super::resolve`].

use regex::Regex;
use texspan_ir::{CandidateMatch, MathMode};

/// How a delimiter's pattern bounds its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchPattern {
    /// Shortest span between the start and end tokens; content excludes them.
    Bracketed,
    /// A named environment; content is the whole block, markers included,
    /// so the engine knows which environment to typeset.
    Environment(String),
}

/// One entry of the delimiter table with its compiled pattern.
#[derive(Debug, Clone)]
pub struct DelimiterSpec {
    pub start: String,
    pub end: String,
    pub mode: MathMode,
    pub pattern: MatchPattern,
    regex: Regex,
}

impl DelimiterSpec {
    /// A start/end token pair with non-greedy content between them.
    pub fn bracketed(start: &str, end: &str, mode: MathMode) -> Self {
        let source = format!(
            r"(?s){}(.*?){}",
            regex::escape(start),
            regex::escape(end)
        );
        Self::compile(start, end, mode, MatchPattern::Bracketed, &source)
    }

    /// A `\begin{name} ... \end{name}` environment.
    pub fn environment(name: &str, mode: MathMode) -> Self {
        let start = format!("\\begin{{{}}}", name);
        let end = format!("\\end{{{}}}", name);
        let source = format!(
            r"(?s){}(.*?){}",
            regex::escape(&start),
            regex::escape(&end)
        );
        Self::compile(
            &start,
            &end,
            mode,
            MatchPattern::Environment(name.to_string()),
            &source,
        )
    }

    fn compile(start: &str, end: &str, mode: MathMode, pattern: MatchPattern, source: &str) -> Self {
        // Sources are built from escaped literals, so they always compile.
        let regex = match Regex::new(source) {
            Ok(regex) => regex,
            Err(err) => panic!("delimiter pattern {:?} failed to compile: {}", source, err),
        };
        Self {
            start: start.to_string(),
            end: end.to_string(),
            mode,
            pattern,
            regex,
        }
    }

    /// All matches of this delimiter in `text`, left to right.
    ///
    /// Each call walks the text with its own cursor; the compiled regex holds
    /// no scan position, so a spec can be shared freely.
    pub fn scan(&self, text: &str) -> Vec<CandidateMatch> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let content = match self.pattern {
                    MatchPattern::Bracketed => caps.get(1)?.as_str(),
                    MatchPattern::Environment(_) => whole.as_str(),
                };
                Some(CandidateMatch::new(
                    self.mode,
                    content,
                    whole.start(),
                    whole.end(),
                ))
            })
            .collect()
    }
}

/// The fixed delimiter table. Order is irrelevant to the result because
/// resolution is positional.
pub fn default_delimiters() -> Vec<DelimiterSpec> {
    vec![
        DelimiterSpec::bracketed("$$", "$$", MathMode::Display),
        DelimiterSpec::bracketed("$", "$", MathMode::Inline),
        DelimiterSpec::bracketed("\\(", "\\)", MathMode::Inline),
        DelimiterSpec::bracketed("\\[", "\\]", MathMode::Display),
        DelimiterSpec::environment("align", MathMode::Display),
        DelimiterSpec::environment("align*", MathMode::Display),
    ]
}

/// Scan `text` with every delimiter and collect all candidates.
pub fn find_candidates(delimiters: &[DelimiterSpec], text: &str) -> Vec<CandidateMatch> {
    let candidates: Vec<CandidateMatch> = delimiters
        .iter()
        .flat_map(|delimiter| delimiter.scan(text))
        .collect();
    tracing::trace!(count = candidates.len(), "scanned delimiter candidates");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(candidates: &[CandidateMatch]) -> Vec<(usize, usize, &str)> {
        candidates
            .iter()
            .map(|c| (c.start, c.end, c.content.as_str()))
            .collect()
    }

    #[test]
    fn test_bracketed_is_non_greedy() {
        let spec = DelimiterSpec::bracketed("$", "$", MathMode::Inline);
        let found = spec.scan("$a$ and $b$");
        assert_eq!(spans(&found), vec![(0, 3, "a"), (8, 11, "b")]);
    }

    #[test]
    fn test_bracketed_spans_newlines() {
        let spec = DelimiterSpec::bracketed("\\[", "\\]", MathMode::Display);
        let found = spec.scan("\\[x\ny\\]");
        assert_eq!(spans(&found), vec![(0, 7, "x\ny")]);
        assert_eq!(found[0].mode, MathMode::Display);
    }

    #[test]
    fn test_unterminated_produces_nothing() {
        let spec = DelimiterSpec::bracketed("\\(", "\\)", MathMode::Inline);
        assert!(spec.scan("open \\( but never closed").is_empty());
    }

    #[test]
    fn test_environment_keeps_markers() {
        let spec = DelimiterSpec::environment("align*", MathMode::Display);
        let input = "pre \\begin{align*}a &= b\\end{align*} post";
        let found = spec.scan(input);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content, "\\begin{align*}a &= b\\end{align*}");
        assert_eq!(&input[found[0].start..found[0].end], found[0].content);
    }

    #[test]
    fn test_align_does_not_match_starred_block() {
        let spec = DelimiterSpec::environment("align", MathMode::Display);
        assert!(spec.scan("\\begin{align*}x\\end{align*}").is_empty());
    }

    #[test]
    fn test_candidates_from_different_delimiters_overlap() {
        let table = default_delimiters();
        let found = find_candidates(&table, "$$a$$");
        // `$$` finds the display span, `$` finds two empty inline spans.
        assert!(found.contains(&CandidateMatch::new(MathMode::Display, "a", 0, 5)));
        assert!(found.contains(&CandidateMatch::new(MathMode::Inline, "", 0, 2)));
        assert!(found.contains(&CandidateMatch::new(MathMode::Inline, "", 3, 5)));
        assert_eq!(found.len(), 3);
    }
}
