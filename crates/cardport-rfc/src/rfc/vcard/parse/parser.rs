//! vCard record parser for contact import.

use super::lexer::{ContentLine, parse_content_line, unfold_lines};
use super::split::split_vcards;
use super::values::{
    email_kind, normalize_birthday, phone_kind, photo_reference, split_structured, unescape_text,
};
use crate::rfc::vcard::core::{
    DEFAULT_ADDRESS_KIND, ParsedAddress, ParsedContact, ParsedEmail, ParsedPhone,
};

/// Parses every vCard block found in `input`.
///
/// ## Summary
/// Splits the input into `BEGIN:VCARD` .. `END:VCARD` blocks and parses each
/// one. Contacts are returned in source order, including empty ones.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_contacts(input: &str) -> Vec<ParsedContact> {
    tracing::debug!("Parsing vCard import");

    let blocks = split_vcards(input);

    tracing::trace!(count = blocks.len(), "Split vCard blocks");

    let contacts: Vec<ParsedContact> = blocks.into_iter().map(parse_contact).collect();

    tracing::debug!(count = contacts.len(), "Parsed contacts");

    contacts
}

/// Parses one vCard block into a contact.
///
/// ## Summary
/// The block is unfolded and read line by line. `BEGIN`, `END` and
/// `VERSION` lines are skipped, as are lines without a colon and unknown
/// properties. Parsing never fails; unusable values are left unset.
///
/// `N` always replaces the name, while `FN` only fills it when no name has
/// been set yet, so `N` wins regardless of order.
#[must_use]
pub fn parse_contact(block: &str) -> ParsedContact {
    let mut builder = ContactBuilder::default();

    for line in unfold_lines(block) {
        if line.trim().is_empty() || is_framing_line(&line) {
            continue;
        }

        let Some(content_line) = parse_content_line(&line) else {
            tracing::trace!(line = %line, "Skipping line without value separator");
            continue;
        };

        builder.apply(content_line);
    }

    builder.finish()
}

/// Returns whether the line is a `BEGIN:`, `END:` or `VERSION:` line.
fn is_framing_line(line: &str) -> bool {
    ["BEGIN:", "END:", "VERSION:"].iter().any(|prefix| {
        line.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Accumulates one contact while its lines are read.
#[derive(Default)]
struct ContactBuilder {
    contact: ParsedContact,
}

impl ContactBuilder {
    fn apply(&mut self, line: ContentLine) {
        let ContentLine {
            name,
            params,
            value,
        } = line;
        let value = unescape_text(&value);

        match name.as_str() {
            "FN" => self.apply_formatted_name(&value),
            "N" => self.apply_structured_name(&value),
            "ORG" => self.contact.organization = non_empty(value),
            "TITLE" => self.contact.job_title = non_empty(value),
            "EMAIL" => {
                self.contact.emails.push(ParsedEmail {
                    email: value,
                    kind: email_kind(&params),
                    is_primary: params.is_preferred(),
                });
            }
            "TEL" => {
                self.contact.phones.push(ParsedPhone {
                    phone: value,
                    kind: phone_kind(&params).to_string(),
                    is_primary: params.is_preferred(),
                });
            }
            "ADR" => {
                // PO box;extended;street;locality;region;postal code;country
                let parts = split_structured(&value);
                let part = |index: usize| parts.get(index).copied().flatten().map(String::from);

                self.contact.addresses.push(ParsedAddress {
                    street: part(2),
                    city: part(3),
                    state: part(4),
                    postal_code: part(5),
                    country: part(6),
                    kind: params.type_value().map_or_else(
                        || DEFAULT_ADDRESS_KIND.to_string(),
                        str::to_ascii_lowercase,
                    ),
                });
            }
            "BDAY" => {
                if let Some(birthday) = normalize_birthday(&value) {
                    self.contact.birthday = Some(birthday);
                } else {
                    tracing::trace!(value = %value, "Ignoring BDAY without a full date");
                }
            }
            "NOTE" => self.contact.notes = non_empty(value),
            "PHOTO" => {
                if let Some(url) = photo_reference(&params, &value) {
                    self.contact.photo_url = Some(url.to_string());
                }
            }
            _ => {}
        }
    }

    fn apply_formatted_name(&mut self, value: &str) {
        if self.contact.has_name() {
            return;
        }

        let mut tokens = value.split(' ');
        self.contact.first_name = tokens.next().and_then(|first| non_empty(first.to_string()));
        self.contact.last_name = non_empty(tokens.collect::<Vec<_>>().join(" "));
    }

    fn apply_structured_name(&mut self, value: &str) {
        // family;given;additional;prefixes;suffixes
        let parts = split_structured(value);
        self.contact.last_name = parts.first().copied().flatten().map(String::from);
        self.contact.first_name = parts.get(1).copied().flatten().map(String::from);
    }

    fn finish(mut self) -> ParsedContact {
        let emails = &mut self.contact.emails;
        if !emails.iter().any(|e| e.is_primary)
            && let Some(first) = emails.first_mut()
        {
            first.is_primary = true;
        }

        let phones = &mut self.contact.phones;
        if !phones.iter().any(|p| p.is_primary)
            && let Some(first) = phones.first_mut()
        {
            first.is_primary = true;
        }

        self.contact
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
