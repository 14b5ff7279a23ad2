//! Contact records produced by the vCard importer.

use serde::Serialize;

/// Email kind used when no TYPE parameter is given.
pub const DEFAULT_EMAIL_KIND: &str = "personal";
/// Phone kind used for unknown or missing TYPE parameters.
pub const DEFAULT_PHONE_KIND: &str = "other";
/// Address kind used when no TYPE parameter is given.
pub const DEFAULT_ADDRESS_KIND: &str = "home";

/// A contact parsed from one vCard block.
///
/// List fields keep source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization: Option<String>,
    pub job_title: Option<String>,
    /// Normalized to `YYYY-MM-DD`.
    pub birthday: Option<String>,
    pub notes: Option<String>,
    /// Only set for URI photo references, never for inline data.
    pub photo_url: Option<String>,
    pub emails: Vec<ParsedEmail>,
    pub phones: Vec<ParsedPhone>,
    pub addresses: Vec<ParsedAddress>,
}

impl ParsedContact {
    /// Returns whether the contact has neither a name nor an organization.
    ///
    /// Empty contacts are still produced by the parser; callers decide
    /// whether to keep them.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.organization.is_none()
    }

    /// Returns whether a first or last name has been set.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    /// Returns a human-readable label for messages.
    ///
    /// Prefers "first last", then the organization, then the first email.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            return Some(name);
        }

        self.organization
            .clone()
            .or_else(|| self.emails.first().map(|e| e.email.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEmail {
    pub email: String,
    /// `personal`, `work`, or the source TYPE lower-cased.
    #[serde(rename = "type")]
    pub kind: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPhone {
    pub phone: String,
    /// One of `mobile`, `home`, `work`, `fax`, `other`.
    #[serde(rename = "type")]
    pub kind: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}
