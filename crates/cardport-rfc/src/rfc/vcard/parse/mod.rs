//! vCard import parsing.
//!
//! ## Usage
//!
//! ```rust
//! use cardport_rfc::rfc::vcard::parse::{parse_contact, split_vcards};
//!
//! let input = "BEGIN:VCARD\nN:Doe;Jane;;;\nEND:VCARD\nBEGIN:VCARD\nORG:Acme\nEND:VCARD\n";
//!
//! let blocks = split_vcards(input);
//! assert_eq!(blocks.len(), 2);
//!
//! let contact = parse_contact(blocks[0]);
//! assert_eq!(contact.last_name.as_deref(), Some("Doe"));
//! ```
//!
//! ## Features
//!
//! - Splits concatenated vCards (case-insensitive delimiters)
//! - Handles line folding/unfolding with CRLF or bare LF
//! - Strips property groups (item1.EMAIL)
//! - Never fails: malformed lines and values are skipped

mod lexer;
mod parser;
mod split;
mod values;

pub use lexer::{ContentLine, parse_content_line, unfold_lines};
pub use parser::{parse_contact, parse_contacts};
pub use split::split_vcards;
pub use values::{
    email_kind, normalize_birthday, phone_kind, photo_reference, split_structured, unescape_text,
};
