//! Extraction of a single object literal out of a larger source file.
//!
//! The category declaration lives inside a JSX component, so instead of parsing
//! the whole file we locate the marker, cut out the balanced `{ ... }` block that
//! follows it and hand that block to a restricted data-literal parser.
//!
//! ## Module Structure
//!
//! - `literal`: recursive-descent parser for object/array/string/number/bool/null
//! - `source`: resolution of the source file path from CLI, env and config

mod literal;
mod source;

use std::ops::Range;

use serde_json::Value;

pub use literal::{MAX_NESTING, parse_literal};
pub use source::{SOURCE_ENV_VAR, resolve_source_path};

use crate::error::{CatalogError, Result};

/// Locate the first balanced brace block after `marker` and return it verbatim.
///
/// Quote characters (`"` and `'`) open a string in which braces are ignored. A
/// backslash inside a string only prevents the next character from closing it.
pub fn locate_literal<'a>(buffer: &'a str, marker: &str) -> Result<&'a str> {
    literal_span(buffer, marker).map(|span| &buffer[span])
}

fn literal_span(buffer: &str, marker: &str) -> Result<Range<usize>> {
    let marker_index = buffer
        .find(marker)
        .ok_or_else(|| CatalogError::MarkerNotFound {
            marker: marker.to_string(),
        })?;

    let brace_start = buffer[marker_index..]
        .find('{')
        .map(|offset| marker_index + offset)
        .ok_or_else(|| {
            CatalogError::malformed(
                marker_index,
                format!("no opening brace follows `{}`", marker),
            )
        })?;

    let bytes = buffer.as_bytes();
    let mut depth: usize = 0;
    let mut in_string: Option<u8> = None;
    let mut escaped = false;

    // All delimiters are ASCII, so scanning bytes never splits a UTF-8 sequence
    // at a position we slice on.
    for (i, &byte) in bytes.iter().enumerate().skip(brace_start) {
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == quote {
                in_string = None;
            }
            continue;
        }

        match byte {
            b'"' | b'\'' => in_string = Some(byte),
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(brace_start..i + 1);
                }
            }
            _ => {}
        }
    }

    let reason = if in_string.is_some() {
        "unterminated string before the closing brace"
    } else {
        "unbalanced braces, reached end of input"
    };
    Err(CatalogError::malformed(brace_start, reason))
}

/// Locate the literal after `marker` and parse it into a JSON value.
pub fn extract_literal(buffer: &str, marker: &str) -> Result<Value> {
    let span = literal_span(buffer, marker)?;
    let offset = span.start;
    parse_literal(&buffer[span]).map_err(|err| match err {
        CatalogError::MalformedInput {
            offset: inner,
            reason,
        } => CatalogError::MalformedInput {
            offset: offset + inner,
            reason,
        },
        other => other,
    })
}
