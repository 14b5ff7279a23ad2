//! Core vCard import types.

mod contact;
mod parameter;

pub use contact::{
    DEFAULT_ADDRESS_KIND, DEFAULT_EMAIL_KIND, DEFAULT_PHONE_KIND, ParsedAddress, ParsedContact,
    ParsedEmail, ParsedPhone,
};
pub use parameter::{FLAG_VALUE, Parameters};
