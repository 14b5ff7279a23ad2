//! Splits a text blob into individual vCard blocks.

use std::sync::LazyLock;

use regex_lite::Regex;

#[expect(
    clippy::expect_used,
    reason = "The pattern is a constant and is covered by tests"
)]
static VCARD_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)BEGIN:VCARD|END:VCARD").expect("vCard delimiter pattern is valid")
});

/// Extracts every `BEGIN:VCARD` .. `END:VCARD` block from `input`.
///
/// Delimiters match case-insensitively and are included in each block. Each
/// `END:VCARD` closes the nearest preceding unmatched `BEGIN:VCARD`, so a
/// truncated card never swallows the card after it. An `END:VCARD` with no
/// open block is ignored. Text outside blocks is ignored, and input without
/// any block yields an empty vector.
#[must_use]
pub fn split_vcards(input: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut open: Option<usize> = None;

    for delimiter in VCARD_DELIMITER.find_iter(input) {
        let is_begin = delimiter
            .as_str()
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("BEGIN"));

        if is_begin {
            if let Some(start) = open {
                tracing::trace!(start, "Discarding vCard without END:VCARD");
            }
            open = Some(delimiter.start());
        } else if let Some(start) = open.take() {
            blocks.push(&input[start..delimiter.end()]);
        }
    }

    blocks
}
