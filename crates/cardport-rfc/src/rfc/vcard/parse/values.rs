//! vCard value helpers for the importer.

use crate::rfc::vcard::core::{DEFAULT_EMAIL_KIND, DEFAULT_PHONE_KIND, Parameters};

/// Unescapes a vCard text value.
///
/// vCard escapes: \n (newline), \, (comma), \; (semicolon), \\ (backslash).
/// Escapes are read left to right, so `\\n` is a backslash followed by `n`.
/// Any other backslash is kept as is.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value (N, ADR) into positional components.
///
/// Components are kept verbatim; only empty ones become `None`.
#[must_use]
pub fn split_structured(s: &str) -> Vec<Option<&str>> {
    s.split(';')
        .map(|part| (!part.is_empty()).then_some(part))
        .collect()
}

/// Normalizes a BDAY value to `YYYY-MM-DD`.
///
/// All non-digits are dropped; the first eight remaining digits are read
/// as year, month and day. Fewer than eight digits yield `None`.
#[must_use]
pub fn normalize_birthday(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    if digits.len() < 8 {
        return None;
    }

    Some(format!(
        "{}-{}-{}",
        &digits[0..4],
        &digits[4..6],
        &digits[6..8]
    ))
}

/// Maps an EMAIL TYPE parameter to an email kind.
///
/// `INTERNET` and a missing TYPE map to `personal`; anything else is passed
/// through lower-cased.
#[must_use]
pub fn email_kind(params: &Parameters) -> String {
    match params.type_value() {
        None | Some("INTERNET") => DEFAULT_EMAIL_KIND.to_string(),
        Some(other) => other.to_ascii_lowercase(),
    }
}

/// Maps a TEL TYPE parameter to a phone kind.
///
/// A missing TYPE is read as `VOICE`, which maps to `other`, as does any
/// unrecognized type.
#[must_use]
pub fn phone_kind(params: &Parameters) -> &'static str {
    match params.type_value().unwrap_or("VOICE") {
        "CELL" => "mobile",
        "HOME" => "home",
        "WORK" => "work",
        "FAX" => "fax",
        _ => DEFAULT_PHONE_KIND,
    }
}

/// Returns the PHOTO value when it is a URI reference.
///
/// A photo counts as a reference when `VALUE=URI` is given or the value
/// starts with `http`. Inline data is never decoded.
#[must_use]
pub fn photo_reference<'a>(params: &Parameters, value: &'a str) -> Option<&'a str> {
    (params.get("VALUE") == Some("URI") || value.starts_with("http")).then_some(value)
}
