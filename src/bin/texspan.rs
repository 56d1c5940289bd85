//! texspan CLI - render mixed text and LaTeX math

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use texspan::{
    restore_segment, MathEngine, MathRenderer, RenderError, RenderResult, Segment, TypstEngine,
};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texspan")]
#[command(version)]
#[command(about = "Split mixed text and LaTeX math into spans and render them", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Engine used to typeset math spans
    #[arg(short, long, value_enum, default_value_t = Engine::Typst)]
    engine: Engine,

    /// Print the segment list as JSON instead of rendering
    #[arg(long)]
    segments: bool,

    /// Log level written to stderr (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[cfg(feature = "cli")]
#[derive(Clone, ValueEnum)]
enum Engine {
    /// LaTeX math to Typst math (mitex)
    Typst,
    /// LaTeX math to MathML (pulldown-latex)
    #[cfg(feature = "mathml")]
    Mathml,
}

#[cfg(feature = "cli")]
fn main() -> RenderResult<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::new(format!("texspan={}", cli.log_level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let produced = if cli.segments {
        dump_segments(&input)
    } else {
        match cli.engine {
            Engine::Typst => render(TypstEngine, &input),
            #[cfg(feature = "mathml")]
            Engine::Mathml => render(texspan::MathMlEngine, &input),
        }
    };
    let result = produced.map_err(|err| {
        if err.is_internal() {
            tracing::error!(%err, "internal error, this is a bug in texspan");
        }
        err
    })?;

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn render<E: MathEngine>(engine: E, input: &str) -> RenderResult<String> {
    MathRenderer::new(engine).try_render(input)
}

#[cfg(feature = "cli")]
fn dump_segments(input: &str) -> RenderResult<String> {
    let segments: Vec<Segment> = texspan::segment_math(input)?
        .iter()
        .map(restore_segment)
        .collect();
    for segment in &segments {
        if let Segment::Math { mode, content } = segment {
            tracing::debug!(%mode, len = content.len(), "math segment");
        }
    }
    serde_json::to_string_pretty(&segments).map_err(|e| RenderError::IoError {
        message: e.to_string(),
    })
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texspan --features cli");
    eprintln!("  texspan [OPTIONS] [INPUT_FILE]");
}
