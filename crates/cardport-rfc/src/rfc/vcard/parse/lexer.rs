//! vCard lexer for line unfolding and content line splitting.
//!
//! Unfolding follows the simple producer convention: a physical line that
//! starts with one space or tab continues the previous logical line.

use crate::rfc::vcard::core::{FLAG_VALUE, Parameters};

/// Splits a vCard block into logical lines, joining folded continuations.
///
/// The single leading space or tab of a continuation line is removed and
/// the rest is appended to the previous line with no separator. Only one
/// whitespace character is consumed, so a continuation that still starts
/// with whitespace keeps it. Both CRLF and bare LF line endings are
/// accepted. A continuation with no preceding line is dropped.
///
/// Blank lines are kept so that callers see the same line structure as the
/// source; they carry no property and are skipped during parsing.
#[must_use]
pub fn unfold_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in input.lines() {
        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some(prev) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                tracing::trace!("Dropping continuation line with nothing to continue");
            }
        } else {
            lines.push(line.to_string());
        }
    }

    lines
}

/// A content line split into name, parameters and raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (uppercase, group prefix removed).
    pub name: String,
    /// Parameters.
    pub params: Parameters,
    /// Raw value string, still escaped.
    pub value: String,
}

/// Parses a single logical line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// The value starts after the first colon, so colons inside the value
/// (URLs, times) are kept. Returns `None` for lines without a colon.
#[must_use]
pub fn parse_content_line(line: &str) -> Option<ContentLine> {
    let (name_params, value) = line.split_once(':')?;

    // Split name from parameters
    let (name, params_str) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    let params = params_str.map(parse_parameters).unwrap_or_default();

    Some(ContentLine {
        name: strip_group(name).trim().to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Removes an optional group prefix (`item1.`).
fn strip_group(name: &str) -> &str {
    if let Some((group, rest)) = name.split_once('.') {
        // Group must be alphanumeric + hyphen
        if !group.is_empty() && group.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return rest;
        }
    }
    name
}

/// Parses `;`-separated parameters. Bare tokens become flags.
fn parse_parameters(s: &str) -> Parameters {
    let mut params = Parameters::new();

    for segment in s.split(';').filter(|segment| !segment.is_empty()) {
        match segment.split_once('=') {
            Some((key, value)) => params.insert(key, value),
            None => params.insert(segment, FLAG_VALUE),
        }
    }

    params
}
