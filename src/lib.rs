//! texspan - split mixed text and LaTeX math into typed spans and render them
//!
//! Input is scanned for `$$...$$`, `$...$`, `\(...\)`, `\[...\]`,
//! `\begin{align}...\end{align}` and `\begin{align*}...\end{align*}`. Where
//! candidates overlap, the earliest start wins and, at the same start, the
//! longest span. Unterminated delimiters stay plain text. `\\` and `\$` are
//! user escapes and never delimit anything.
//!
//! Text segments have newlines turned into ` \\ ` line breaks. Math segments
//! are typeset by a [`MathEngine`]; the default [`TypstEngine`] emits Typst
//! math markup.
//!
//! # Example
//!
//! ```
//! use texspan::{render_math_with, RenderOptions};
//!
//! let engine = |content: &str, options: RenderOptions| {
//!     let mode = if options.display { "display" } else { "inline" };
//!     format!("<typeset {}>{}</typeset>", mode, content)
//! };
//! assert_eq!(
//!     render_math_with(&engine, "Let $x=5$."),
//!     "Let <typeset inline>x=5</typeset>."
//! );
//! ```

pub mod core;
pub mod engine;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use texspan_ir::{CandidateMatch, MathMode, Segment};

pub use crate::core::delimiters::{default_delimiters, find_candidates, DelimiterSpec, MatchPattern};
pub use crate::core::escape::{
    convert_newlines, escape_sequence, preprocess, restore_segment, revert_for_engine,
    revert_for_text, sanitize, SENTINEL_BACKSLASH, SENTINEL_DOLLAR,
};
pub use crate::core::pipeline::{render_segments, MathRenderer, RenderContext, DEFAULT_CONTEXT};
pub use crate::core::postprocess::{rewrite_error_message, GENERIC_ERROR_LABEL};
pub use crate::core::resolve::resolve_overlaps;
pub use crate::core::segments::build_segments;
pub use crate::engine::{error_markup, MathEngine, RenderOptions, TypstEngine};
pub use crate::utils::error::{RenderError, RenderResult};

#[cfg(feature = "mathml")]
pub use crate::engine::MathMlEngine;

/// Render `input` with the default delimiter table and the Typst engine.
pub fn render_math(input: &str) -> String {
    render_math_with(&TypstEngine, input)
}

/// Render `input` with the default delimiter table and a caller-supplied
/// engine.
pub fn render_math_with<E: MathEngine + ?Sized>(engine: &E, input: &str) -> String {
    match DEFAULT_CONTEXT.segment(input) {
        Ok(segments) => render_segments(engine, &segments),
        Err(err) => panic!("{}", err),
    }
}

/// Segment `input` with the default delimiter table. Segment contents keep
/// user escapes as sentinel characters.
pub fn segment_math(input: &str) -> RenderResult<Vec<Segment>> {
    DEFAULT_CONTEXT.segment(input)
}
