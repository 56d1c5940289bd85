//! LaTeX math to Typst math via mitex

use super::{error_markup, MathEngine, RenderOptions};

/// Prefix carried by conversion failures from this engine.
pub const MITEX_ERROR_PREFIX: &str = "mitex parse error:";

/// Converts each span to Typst math markup: `$...$` inline, `$ ... $` as a
/// block.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypstEngine;

impl TypstEngine {
    pub fn new() -> Self {
        TypstEngine
    }
}

impl MathEngine for TypstEngine {
    fn render(&self, content: &str, options: RenderOptions) -> String {
        match mitex::convert_math(content, None) {
            Ok(converted) => {
                let converted = converted.trim();
                if options.display {
                    format!("$ {} $", converted)
                } else {
                    format!("${}$", converted)
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "mitex could not convert math span");
                error_markup(
                    content,
                    &format!("{} {}", MITEX_ERROR_PREFIX, err),
                    options,
                )
            }
        }
    }

    fn error_prefix(&self) -> Option<&str> {
        Some(MITEX_ERROR_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_wraps_in_dollars() {
        let out = TypstEngine.render("x^2", RenderOptions::inline());
        assert!(out.starts_with('$') && out.ends_with('$'));
        assert!(!out.starts_with("$ "));
        assert!(out.contains('x') && out.contains('2'));
    }

    #[test]
    fn test_display_is_padded() {
        let out = TypstEngine.render(r"\frac{a}{b}", RenderOptions::display());
        assert!(out.starts_with("$ ") && out.ends_with(" $"));
        assert!(out.contains("frac"));
    }

    #[test]
    fn test_reports_its_error_prefix() {
        assert_eq!(TypstEngine.error_prefix(), Some(MITEX_ERROR_PREFIX));
    }
}
