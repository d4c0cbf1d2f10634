//! Tolerant JSON document loading
//!
//! Locale and settings files pulled from a storefront may start with an
//! auto-generation warning written as a block comment before the JSON
//! payload, and hand-edited files occasionally carry trailing artifacts
//! after the closing brace. The reader tolerates both; anything worse is a
//! typed parse failure carrying the file path and parser diagnostic.

use std::borrow::Cow;
use std::fs;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{Error, NormalizedPath, Result};

/// Read a JSON document from disk.
///
/// A missing file is not an error: it models "no file on this side yet"
/// and yields an empty document.
///
/// # Errors
///
/// Returns `Error::Io` if the file exists but cannot be read, or
/// `Error::JsonParse` if neither the primary nor the recovery parse can
/// extract a document.
pub fn read_document(path: &NormalizedPath) -> Result<Value> {
    let native = path.to_native();
    if !native.exists() {
        debug!(path = %path, "no document on disk, treating as empty");
        return Ok(Value::Object(Map::new()));
    }

    let text = fs::read_to_string(&native).map_err(|e| Error::io(&native, e))?;
    parse_document(path, &text)
}

/// Parse document text, tolerating a block-comment preamble and trailing
/// artifacts.
pub fn parse_document(path: &NormalizedPath, text: &str) -> Result<Value> {
    let cleaned = blank_preamble(text);

    let diagnostic = match serde_json::from_str(cleaned.as_ref()) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    // Recovery pass: accept the first complete value and ignore whatever
    // follows it. This rescues files with stray characters after the
    // closing brace while keeping the primary diagnostic for reporting.
    let mut stream = serde_json::Deserializer::from_str(cleaned.as_ref()).into_iter::<Value>();
    if let Some(Ok(value)) = stream.next() {
        warn!(
            path = %path,
            error = %diagnostic,
            "recovered JSON document with trailing artifacts"
        );
        return Ok(value);
    }

    Err(Error::JsonParse {
        path: path.to_native(),
        message: diagnostic.to_string(),
        line: diagnostic.line(),
        column: diagnostic.column(),
    })
}

/// Blank out a leading `/* ... */` preamble in place.
///
/// Comment bytes become spaces while newlines are kept, so parser
/// diagnostics still point at the original line and column. Text without a
/// leading block comment is returned untouched.
fn blank_preamble(text: &str) -> Cow<'_, str> {
    let Some(start) = text.find(|c: char| !c.is_whitespace()) else {
        return Cow::Borrowed(text);
    };
    if !text[start..].starts_with("/*") {
        return Cow::Borrowed(text);
    }
    let Some(close) = text[start..].find("*/") else {
        // Unterminated comment: leave it for the parser to report.
        return Cow::Borrowed(text);
    };
    let end = start + close + 2;

    let blanked: String = text
        .char_indices()
        .map(|(i, c)| {
            if i >= start && i < end && c != '\n' {
                ' '
            } else {
                c
            }
        })
        .collect();
    Cow::Owned(blanked)
}
