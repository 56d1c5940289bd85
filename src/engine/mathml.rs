//! LaTeX math to MathML via pulldown-latex

use pulldown_latex::{
    config::DisplayMode, config::RenderConfig, mathml::push_mathml, Parser, Storage,
};

use super::{error_markup, MathEngine, RenderOptions};

/// Renders each span to a `<math>` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathMlEngine;

impl MathEngine for MathMlEngine {
    fn render(&self, content: &str, options: RenderOptions) -> String {
        let storage = Storage::new();
        let parser = Parser::new(content, &storage);
        let config = RenderConfig {
            display_mode: if options.display {
                DisplayMode::Block
            } else {
                DisplayMode::Inline
            },
            ..Default::default()
        };

        let events: Vec<_> = parser.collect();
        let errors: Vec<String> = events
            .iter()
            .filter_map(|e| e.as_ref().err().map(|err| err.to_string()))
            .collect();
        if !errors.is_empty() {
            let message = errors.join("; ");
            tracing::warn!(error = %message, "pulldown-latex could not parse math span");
            return error_markup(content, &message, options);
        }

        let mut mathml = String::new();
        if let Err(err) = push_mathml(&mut mathml, events.into_iter(), config) {
            return error_markup(content, &err.to_string(), options);
        }
        mathml
    }
}
