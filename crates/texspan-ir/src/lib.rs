//! Shared data model for math span segmentation.
//!
//! Offsets are byte offsets into the escaped input; `end` is exclusive.

use serde::{Deserialize, Serialize};

/// How a math span is typeset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathMode {
    /// Set within a line of text.
    Inline,
    /// Set as its own block.
    Display,
}

impl MathMode {
    pub fn is_display(self) -> bool {
        matches!(self, MathMode::Display)
    }
}

impl std::fmt::Display for MathMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathMode::Inline => write!(f, "inline"),
            MathMode::Display => write!(f, "display"),
        }
    }
}

/// A delimiter match found during scanning. Candidates from different
/// delimiters may overlap until they are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub mode: MathMode,
    pub content: String,
    pub start: usize,
    pub end: usize,
}

impl CandidateMatch {
    pub fn new(mode: MathMode, content: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            mode,
            content: content.into(),
            start,
            end,
        }
    }

    /// Length of the whole match, delimiters included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One contiguous, classified slice of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Text { content: String },
    Math { mode: MathMode, content: String },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    pub fn math(mode: MathMode, content: impl Into<String>) -> Self {
        Segment::Math {
            mode,
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Segment::Text { content } => content,
            Segment::Math { content, .. } => content,
        }
    }

    pub fn is_math(&self) -> bool {
        matches!(self, Segment::Math { .. })
    }

    /// Always false for text.
    pub fn is_display(&self) -> bool {
        match self {
            Segment::Text { .. } => false,
            Segment::Math { mode, .. } => mode.is_display(),
        }
    }
}
