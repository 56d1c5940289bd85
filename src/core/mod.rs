//! Segmentation and rendering pipeline
//!
//! - `escape`: sanitizer, sentinel substitution and the two reversion modes
//! - `delimiters`: delimiter table and candidate scanning
//! - `resolve`: overlap resolution
//! - `segments`: segment building
//! - `postprocess`: per-segment output
//! - `pipeline`: the read-only context and the renderer

pub mod delimiters;
pub mod escape;
pub mod pipeline;
pub mod postprocess;
pub mod resolve;
pub mod segments;
