//! Contact import behavior over whole vCards.

use super::fixtures::*;
use crate::rfc::vcard::{parse_contact, parse_contacts, split_vcards};

fn parse_one(input: &str) -> crate::rfc::vcard::ParsedContact {
    let blocks = split_vcards(input);
    assert_eq!(blocks.len(), 1, "expected exactly one vCard block");
    parse_contact(blocks[0])
}

#[test_log::test]
fn basic_contact() {
    let contact = parse_one(VCARD_BASIC);

    assert_eq!(contact.first_name.as_deref(), Some("John"));
    assert_eq!(contact.last_name.as_deref(), Some("Smith"));

    assert_eq!(contact.emails.len(), 1);
    assert_eq!(contact.emails[0].email, "john@x.com");
    assert_eq!(contact.emails[0].kind, "work");
    assert!(contact.emails[0].is_primary);

    assert_eq!(contact.phones.len(), 1);
    assert_eq!(contact.phones[0].phone, "+15551234567");
    assert_eq!(contact.phones[0].kind, "mobile");
    assert!(contact.phones[0].is_primary);
}

#[test]
fn structured_name_wins_after_formatted_name() {
    let contact = parse_one(VCARD_FN_THEN_N);
    assert_eq!(contact.first_name.as_deref(), Some("Jane"));
    assert_eq!(contact.last_name.as_deref(), Some("Doe"));
}

#[test]
fn structured_name_wins_before_formatted_name() {
    let contact = parse_one(VCARD_N_THEN_FN);
    assert_eq!(contact.first_name.as_deref(), Some("Jane"));
    assert_eq!(contact.last_name.as_deref(), Some("Doe"));
}

#[test]
fn formatted_name_single_token() {
    let contact = parse_contact("BEGIN:VCARD\nFN:Madonna\nEND:VCARD");
    assert_eq!(contact.first_name.as_deref(), Some("Madonna"));
    assert_eq!(contact.last_name, None);
}

#[test]
fn formatted_name_keeps_remaining_tokens() {
    let contact = parse_contact("BEGIN:VCARD\nFN:Anna Maria de la Cruz\nEND:VCARD");
    assert_eq!(contact.first_name.as_deref(), Some("Anna"));
    assert_eq!(contact.last_name.as_deref(), Some("Maria de la Cruz"));
}

#[test]
fn first_email_becomes_primary() {
    let contact = parse_one(VCARD_TWO_EMAILS);

    assert_eq!(contact.emails.len(), 2);
    assert_eq!(contact.emails[0].email, "ann@home.example");
    assert_eq!(contact.emails[0].kind, "personal");
    assert!(contact.emails[0].is_primary);
    assert_eq!(contact.emails[1].kind, "work");
    assert!(!contact.emails[1].is_primary);
}

#[test]
fn explicit_pref_is_kept() {
    let contact = parse_one(VCARD_PREFERRED);

    assert!(!contact.emails[0].is_primary);
    assert!(contact.emails[1].is_primary);
    assert_eq!(contact.emails[1].email, "ann@work.example");

    assert!(!contact.phones[0].is_primary);
    assert!(contact.phones[1].is_primary);
    assert_eq!(contact.phones[1].kind, "mobile");
}

#[test]
fn folded_note_is_reassembled() {
    let contact = parse_one(VCARD_FOLDED_NOTE);
    assert_eq!(
        contact.notes.as_deref(),
        Some("This note is split across two physical lines.")
    );
}

#[test]
fn birthday_normalization() {
    let compact = parse_contact("BEGIN:VCARD\nFN:A B\nBDAY:19850307\nEND:VCARD");
    assert_eq!(compact.birthday.as_deref(), Some("1985-03-07"));

    let dashed = parse_contact("BEGIN:VCARD\nFN:A B\nBDAY:1985-03-07\nEND:VCARD");
    assert_eq!(dashed.birthday.as_deref(), Some("1985-03-07"));

    let short = parse_contact("BEGIN:VCARD\nFN:A B\nBDAY:85\nEND:VCARD");
    assert_eq!(short.birthday, None);
}

#[test]
fn photo_uri_is_kept() {
    let contact = parse_one(VCARD_URI_PHOTO);
    assert_eq!(contact.photo_url.as_deref(), Some("http://example.com/a.jpg"));
}

#[test]
fn inline_photo_is_ignored() {
    let contact = parse_one(VCARD_INLINE_PHOTO);
    assert_eq!(contact.photo_url, None);
    assert_eq!(contact.first_name.as_deref(), Some("Pat"));
}

#[test_log::test]
fn concatenated_cards_in_order() {
    let contacts = parse_contacts(VCARD_THREE_CONCATENATED);

    let first_names: Vec<_> = contacts
        .iter()
        .map(|c| c.first_name.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(first_names, vec!["First", "Second", "Third"]);
}

#[test]
fn phone_only_contact_is_produced_but_empty() {
    let contact = parse_one(VCARD_PHONE_ONLY);

    assert!(contact.is_empty());
    assert_eq!(contact.phones.len(), 1);
    assert_eq!(contact.phones[0].kind, "other");
    assert!(contact.phones[0].is_primary);
}

#[test]
fn newline_escape_and_escaped_backslash() {
    let real = parse_contact("BEGIN:VCARD\nFN:A B\nNOTE:Line1\\nLine2\nEND:VCARD");
    assert_eq!(real.notes.as_deref(), Some("Line1\nLine2"));

    let literal = parse_contact("BEGIN:VCARD\nFN:A B\nNOTE:Line1\\\\nLine2\nEND:VCARD");
    assert_eq!(literal.notes.as_deref(), Some("Line1\\nLine2"));
}

#[test]
fn full_entry() {
    let contact = parse_one(VCARD_FULL);

    assert_eq!(contact.first_name.as_deref(), Some("Robert"));
    assert_eq!(contact.last_name.as_deref(), Some("Wilson"));
    assert_eq!(contact.organization.as_deref(), Some("Acme Corporation"));
    assert_eq!(contact.job_title.as_deref(), Some("Head of Research"));
    assert_eq!(contact.birthday.as_deref(), Some("1975-11-30"));
    assert_eq!(
        contact.notes.as_deref(),
        Some("Met at the conference, 2019")
    );

    // Grouped property, repeated TYPE keeps the last value
    assert_eq!(contact.emails.len(), 1);
    assert_eq!(contact.emails[0].email, "robert@acme.example");
    assert_eq!(contact.emails[0].kind, "pref");
    assert!(contact.emails[0].is_primary);

    let phone_kinds: Vec<_> = contact.phones.iter().map(|p| p.kind.as_str()).collect();
    assert_eq!(phone_kinds, vec!["work", "fax"]);

    assert_eq!(contact.addresses.len(), 2);
    let work = &contact.addresses[0];
    assert_eq!(work.kind, "work");
    assert_eq!(work.street.as_deref(), Some("123 Main St"));
    assert_eq!(work.city.as_deref(), Some("Anytown"));
    assert_eq!(work.state.as_deref(), Some("CA"));
    assert_eq!(work.postal_code.as_deref(), Some("12345"));
    assert_eq!(work.country.as_deref(), Some("USA"));

    let home = &contact.addresses[1];
    assert_eq!(home.kind, "home");
    assert_eq!(home.country, None);
    assert_eq!(contact.photo_url, None);
}

#[test]
fn malformed_lines_are_skipped() {
    let contact = parse_contact(
        "BEGIN:VCARD\nthis line has no separator\nX-UNKNOWN:value\nORG:Acme\nBDAY:not a date\nEND:VCARD",
    );

    assert_eq!(contact.organization.as_deref(), Some("Acme"));
    assert_eq!(contact.birthday, None);
    assert!(!contact.is_empty());
}

#[test]
fn blank_email_and_phone_are_kept_in_order() {
    let contact = parse_contact("BEGIN:VCARD\nFN:A B\nEMAIL:\nEMAIL:x@y.example\nTEL:\nEND:VCARD");

    assert_eq!(contact.emails.len(), 2);
    assert_eq!(contact.emails[0].email, "");
    assert!(contact.emails[0].is_primary);
    assert_eq!(contact.emails[1].email, "x@y.example");
    assert!(!contact.emails[1].is_primary);
    assert_eq!(contact.phones.len(), 1);
    assert!(contact.phones[0].is_primary);
}

#[test]
fn structured_components_are_not_trimmed() {
    let contact = parse_contact(
        "BEGIN:VCARD\nN:Doe ; Jane;;;\nADR:;;  1 Main St ;Springfield;;;\nEND:VCARD",
    );

    assert_eq!(contact.last_name.as_deref(), Some("Doe "));
    assert_eq!(contact.first_name.as_deref(), Some(" Jane"));
    assert_eq!(contact.addresses[0].street.as_deref(), Some("  1 Main St "));
    assert_eq!(contact.addresses[0].city.as_deref(), Some("Springfield"));
}

#[test]
fn truncated_card_does_not_leak_into_next() {
    let contacts =
        parse_contacts("BEGIN:VCARD\nORG:Broken Inc\nBEGIN:VCARD\nFN:Carl Good\nEND:VCARD");

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].first_name.as_deref(), Some("Carl"));
    assert_eq!(contacts[0].organization, None);
}
