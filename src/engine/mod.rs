//! Math typesetting engines
//!
//! The renderer hands every math span to a [`MathEngine`] together with its
//! mode. Engines must not fail: notation errors come back as inline error
//! markup, a `<span>` whose `title` attribute carries the message.

mod typst;

#[cfg(feature = "mathml")]
mod mathml;

pub use typst::{TypstEngine, MITEX_ERROR_PREFIX};

#[cfg(feature = "mathml")]
pub use mathml::MathMlEngine;

use pulldown_cmark_escape::escape_html;
use std::panic::{self, AssertUnwindSafe};

/// Options passed to the engine for one span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render as a display block rather than inline.
    pub display: bool,
}

impl RenderOptions {
    pub fn inline() -> Self {
        Self { display: false }
    }

    pub fn display() -> Self {
        Self { display: true }
    }
}

/// An external math typesetting engine.
pub trait MathEngine {
    /// Typeset `content`. Recoverable notation errors are returned as inline
    /// error markup, never as a panic.
    fn render(&self, content: &str, options: RenderOptions) -> String;

    /// Engine-specific prefix of parse-error messages, rewritten to a generic
    /// label by the postprocessor.
    fn error_prefix(&self) -> Option<&str> {
        None
    }
}

impl<F> MathEngine for F
where
    F: Fn(&str, RenderOptions) -> String,
{
    fn render(&self, content: &str, options: RenderOptions) -> String {
        self(content, options)
    }
}

/// Run the engine, turning a panic into error markup so one bad span cannot
/// abort the whole render.
pub fn render_guarded<E: MathEngine + ?Sized>(
    engine: &E,
    content: &str,
    options: RenderOptions,
) -> String {
    match panic::catch_unwind(AssertUnwindSafe(|| engine.render(content, options))) {
        Ok(markup) => markup,
        Err(payload) => {
            let reason = if let Some(s) = payload.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown error".to_string()
            };
            tracing::warn!(%reason, display = options.display, "math engine panicked");
            error_markup(content, &format!("Engine failure: {}", reason), options)
        }
    }
}

/// Inline error markup: the source in a `<code>` element, the message in the
/// `title` attribute.
pub fn error_markup(source: &str, message: &str, options: RenderOptions) -> String {
    let mode_class = if options.display {
        "math-display"
    } else {
        "math-inline"
    };
    let mut escaped_source = String::new();
    let mut escaped_message = String::new();
    let _ = escape_html(&mut escaped_source, source);
    let _ = escape_html(&mut escaped_message, message);
    format!(
        r#"<span class="math-error {}" title="{}"><code>{}</code></span>"#,
        mode_class, escaped_message, escaped_source
    )
}
