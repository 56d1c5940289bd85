//! Utility modules
//!
//! - Error types and result types

pub mod error;

pub use error::{RenderError, RenderResult};
