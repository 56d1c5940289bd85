//! The render pipeline
//!
//! sanitize -> escape -> match -> resolve -> build segments -> postprocess.
//! Every stage is a pure function; the only shared data is the read-only
//! delimiter table in [`RenderContext`].

use lazy_static::lazy_static;
use texspan_ir::Segment;

use super::delimiters::{default_delimiters, find_candidates, DelimiterSpec};
use super::escape::{preprocess, sanitize};
use super::postprocess::postprocess_segment;
use super::resolve::resolve_overlaps;
use super::segments::build_segments;
use crate::engine::{MathEngine, TypstEngine};
use crate::utils::error::RenderResult;

lazy_static! {
    /// Built once and only ever read.
    pub static ref DEFAULT_CONTEXT: RenderContext = RenderContext::new();
}

/// Immutable configuration for segmentation: the delimiter table.
#[derive(Debug, Clone)]
pub struct RenderContext {
    delimiters: Vec<DelimiterSpec>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext {
    pub fn new() -> Self {
        Self::with_delimiters(default_delimiters())
    }

    pub fn with_delimiters(delimiters: Vec<DelimiterSpec>) -> Self {
        RenderContext { delimiters }
    }

    pub fn delimiters(&self) -> &[DelimiterSpec] {
        &self.delimiters
    }

    /// Split `input` into text and math segments. Contents are still escaped:
    /// user escapes appear as sentinel characters.
    pub fn segment(&self, input: &str) -> RenderResult<Vec<Segment>> {
        let escaped = preprocess(&sanitize(input))?;
        let candidates = find_candidates(&self.delimiters, &escaped);
        let accepted = resolve_overlaps(candidates);
        let segments = build_segments(&escaped, accepted);
        tracing::debug!(
            segments = segments.len(),
            math = segments.iter().filter(|s| s.is_math()).count(),
            "segmented input"
        );
        Ok(segments)
    }
}

/// A render context paired with a typesetting engine.
#[derive(Debug, Clone)]
pub struct MathRenderer<E> {
    context: RenderContext,
    engine: E,
}

impl Default for MathRenderer<TypstEngine> {
    fn default() -> Self {
        Self::new(TypstEngine)
    }
}

impl<E: MathEngine> MathRenderer<E> {
    pub fn new(engine: E) -> Self {
        Self::with_context(DEFAULT_CONTEXT.clone(), engine)
    }

    pub fn with_context(context: RenderContext, engine: E) -> Self {
        MathRenderer { context, engine }
    }

    pub fn segment(&self, input: &str) -> RenderResult<Vec<Segment>> {
        self.context.segment(input)
    }

    /// Render every segment and join the results without separators.
    pub fn try_render(&self, input: &str) -> RenderResult<String> {
        let segments = self.context.segment(input)?;
        Ok(render_segments(&self.engine, &segments))
    }

    /// Like [`try_render`](Self::try_render). Panics only if the escape
    /// table is inconsistent, which no input can cause.
    pub fn render(&self, input: &str) -> String {
        match self.try_render(input) {
            Ok(output) => output,
            Err(err) => panic!("{}", err),
        }
    }
}

pub fn render_segments<E: MathEngine + ?Sized>(engine: &E, segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| postprocess_segment(engine, segment))
        .collect()
}
