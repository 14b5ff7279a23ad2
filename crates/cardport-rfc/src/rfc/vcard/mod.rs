//! vCard contact import (RFC 6350, permissive).
//!
//! This module turns vCard text into flat contact records suitable for a
//! contact book: names, organization, emails, phones, addresses, birthday,
//! notes and a photo reference.
//!
//! ## Overview
//!
//! Import is best-effort. Producers in the wild disagree on almost every
//! detail of the format, so nothing here returns an error: malformed lines,
//! unknown properties and unusable values are skipped.
//!
//! ## Usage
//!
//! ```rust
//! use cardport_rfc::rfc::vcard::parse_contacts;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Smith\r\n\
//! EMAIL;TYPE=WORK:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = parse_contacts(input);
//! assert_eq!(contacts[0].first_name.as_deref(), Some("John"));
//! assert_eq!(contacts[0].emails[0].kind, "work");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Parsed contact types and property parameters
//! - [`parse`] - Splitting, unfolding and record parsing

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use core::{ParsedAddress, ParsedContact, ParsedEmail, ParsedPhone, Parameters};
pub use parse::{parse_contact, parse_contacts, split_vcards};
