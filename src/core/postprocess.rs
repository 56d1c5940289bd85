//! Per-segment postprocessing
//!
//! Text gets newline conversion and then plain sentinel reversion. Math gets
//! engine-mode reversion, goes through the engine, and has its error message
//! relabelled.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use texspan_ir::{MathMode, Segment};

use super::escape::{contains_sentinel, convert_newlines, revert_for_engine, revert_for_text};
use crate::engine::{render_guarded, MathEngine, RenderOptions};

/// Generic label that replaces an engine's parse-error prefix.
pub const GENERIC_ERROR_LABEL: &str = "LaTeX Error:";

lazy_static! {
    static ref TITLE_ATTR: Regex =
        Regex::new(r#"title="([^"]*)""#).expect("title attribute pattern is valid");
}

/// Newlines become forced line breaks, then sentinels become literals. The
/// order matters: a reverted backslash must never join a break token.
pub fn postprocess_text(content: &str) -> String {
    revert_for_text(&convert_newlines(content))
}

/// Typeset one math span.
pub fn postprocess_math<E: MathEngine + ?Sized>(engine: &E, content: &str, mode: MathMode) -> String {
    let source = revert_for_engine(content);
    assert!(
        !contains_sentinel(&source),
        "sentinel survived engine reversion"
    );

    let options = RenderOptions {
        display: mode.is_display(),
    };
    let markup = render_guarded(engine, &source, options);
    match engine.error_prefix() {
        Some(prefix) => rewrite_error_message(&markup, prefix),
        None => markup,
    }
}

/// Replace the first `prefix` inside each `title="..."` attribute with
/// [`GENERIC_ERROR_LABEL`]. Text outside the attribute is left alone.
pub fn rewrite_error_message(markup: &str, prefix: &str) -> String {
    if prefix.is_empty() || !markup.contains(prefix) {
        return markup.to_string();
    }
    TITLE_ATTR
        .replace_all(markup, |caps: &Captures| {
            format!(
                "title=\"{}\"",
                caps[1].replacen(prefix, GENERIC_ERROR_LABEL, 1)
            )
        })
        .into_owned()
}

pub fn postprocess_segment<E: MathEngine + ?Sized>(engine: &E, segment: &Segment) -> String {
    match segment {
        Segment::Text { content } => postprocess_text(content),
        Segment::Math { mode, content } => postprocess_math(engine, content, *mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::escape::{SENTINEL_BACKSLASH, SENTINEL_DOLLAR};
    use pretty_assertions::assert_eq;

    struct Failing;

    impl MathEngine for Failing {
        fn render(&self, content: &str, _options: RenderOptions) -> String {
            format!(
                r#"<span class="katex-error" title="ParseError: KaTeX parse error: Undefined control sequence">{}</span>"#,
                content
            )
        }

        fn error_prefix(&self) -> Option<&str> {
            Some("KaTeX parse error:")
        }
    }

    #[test]
    fn test_text_newlines_then_sentinels() {
        let content = format!("a\nb{}c{}", SENTINEL_BACKSLASH, SENTINEL_DOLLAR);
        assert_eq!(postprocess_text(&content), r"a \\ b\c$");
    }

    #[test]
    fn test_math_gets_engine_reversion() {
        let seen = std::cell::RefCell::new(String::new());
        let engine = |content: &str, _options: RenderOptions| {
            seen.replace(content.to_string());
            String::new()
        };
        let content = format!("a{}b{}", SENTINEL_BACKSLASH, SENTINEL_DOLLAR);
        postprocess_math(&engine, &content, MathMode::Inline);
        assert_eq!(seen.into_inner(), r"a\\b$");
    }

    #[test]
    fn test_math_passes_mode() {
        let engine = |_content: &str, options: RenderOptions| options.display.to_string();
        assert_eq!(postprocess_math(&engine, "x", MathMode::Display), "true");
        assert_eq!(postprocess_math(&engine, "x", MathMode::Inline), "false");
    }

    #[test]
    fn test_error_prefix_is_relabelled_in_title_only() {
        let out = postprocess_math(&Failing, "KaTeX parse error: \\foo", MathMode::Inline);
        assert_eq!(
            out,
            r#"<span class="katex-error" title="ParseError: LaTeX Error: Undefined control sequence">KaTeX parse error: \foo</span>"#
        );
    }

    #[test]
    fn test_other_prefixes_untouched() {
        let markup = r#"<span title="ParseError: something else">x</span>"#;
        assert_eq!(rewrite_error_message(markup, "KaTeX parse error:"), markup);
    }

    #[test]
    fn test_segment_dispatch() {
        let engine = |content: &str, _options: RenderOptions| format!("<m>{}</m>", content);
        assert_eq!(
            postprocess_segment(&engine, &Segment::text("a\nb")),
            r"a \\ b"
        );
        assert_eq!(
            postprocess_segment(&engine, &Segment::math(MathMode::Inline, "a\nb")),
            "<m>a\nb</m>"
        );
    }
}
