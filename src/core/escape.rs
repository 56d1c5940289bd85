//! Sentinel placeholders for user escapes
//!
//! An escaped backslash (`\\`) or escaped dollar (`\$`) must never be read as
//! part of a delimiter. Before scanning, each is swapped for a private-use
//! sentinel character; after segmentation the sentinels are reverted, with a
//! different target alphabet for plain text and for engine input.

use phf::phf_map;
use texspan_ir::Segment;

use crate::utils::error::{RenderError, RenderResult};

/// Stands for a literal backslash the user escaped as `\\`.
pub const SENTINEL_BACKSLASH: char = '\u{E000}';
/// Stands for a literal dollar sign the user escaped as `\$`.
pub const SENTINEL_DOLLAR: char = '\u{E001}';

pub const ESCAPED_BACKSLASH: &str = "\\\\";
pub const ESCAPED_DOLLAR: &str = "\\$";

/// Forced line break that replaces newlines in text segments.
pub const LINE_BREAK: &str = " \\\\ ";

static ESCAPE_SENTINELS: phf::Map<&'static str, char> = phf_map! {
    "\\\\" => SENTINEL_BACKSLASH,
    "\\$" => SENTINEL_DOLLAR,
};

/// Substitution order. The two entries read and write disjoint characters
/// once the backslash pair is consumed first.
const ESCAPE_ORDER: [&str; 2] = [ESCAPED_BACKSLASH, ESCAPED_DOLLAR];

pub fn is_sentinel(c: char) -> bool {
    c == SENTINEL_BACKSLASH || c == SENTINEL_DOLLAR
}

pub fn contains_sentinel(s: &str) -> bool {
    s.chars().any(is_sentinel)
}

/// Remove every sentinel character from raw input so callers cannot forge an
/// internal escape.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|&c| !is_sentinel(c)).collect()
}

/// Replace every occurrence of one escape sequence with its sentinel.
///
/// Fails only if `sequence` has no sentinel, which means the escape table and
/// the caller are out of sync.
pub fn escape_sequence(input: &str, sequence: &str) -> RenderResult<String> {
    let sentinel = ESCAPE_SENTINELS
        .get(sequence)
        .ok_or_else(|| RenderError::unknown_escape(sequence))?;
    let mut buf = [0u8; 4];
    Ok(input.replace(sequence, sentinel.encode_utf8(&mut buf)))
}

/// Apply every escape substitution in table order.
pub fn preprocess(input: &str) -> RenderResult<String> {
    ESCAPE_ORDER
        .iter()
        .try_fold(input.to_string(), |text, sequence| {
            escape_sequence(&text, sequence)
        })
}

/// Sentinels back to the literal characters they stand for.
pub fn revert_for_text(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            SENTINEL_BACKSLASH => '\\',
            SENTINEL_DOLLAR => '$',
            other => other,
        })
        .collect()
}

/// Sentinels back to a form the typesetting engine reads as the same literal:
/// the backslash stays escaped (doubled), the dollar becomes bare.
pub fn revert_for_engine(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match c {
            SENTINEL_BACKSLASH => out.push_str("\\\\"),
            SENTINEL_DOLLAR => out.push('$'),
            other => out.push(other),
        }
    }
    out
}

pub fn convert_newlines(s: &str) -> String {
    s.replace('\n', LINE_BREAK)
}

/// Revert a segment's sentinels with the mode its kind uses, without any
/// other postprocessing. For exporting segments.
pub fn restore_segment(segment: &Segment) -> Segment {
    match segment {
        Segment::Text { content } => Segment::text(revert_for_text(content)),
        Segment::Math { mode, content } => Segment::math(*mode, revert_for_engine(content)),
    }
}
