//! Contact persistence seam.
//!
//! The importer talks to storage only through [`ContactStore`]. Each call is
//! an independent operation; nothing spans several calls, so a failure in
//! one leaves earlier writes in place.

mod memory;
mod postgres;

pub use memory::{MemoryContactStore, StoredContact};
pub use postgres::PgContactStore;

use cardport_rfc::rfc::vcard::{ParsedAddress, ParsedContact, ParsedEmail, ParsedPhone};
use futures::future::BoxFuture;

use crate::error::ServiceResult;

pub trait ContactStore: Send + Sync {
    /// Returns the organization the user belongs to, if any.
    fn organization_for_user(
        &self,
        user_id: uuid::Uuid,
    ) -> BoxFuture<'_, ServiceResult<Option<uuid::Uuid>>>;

    /// Persists the contact's own fields and returns the new contact id.
    fn insert_contact<'a>(
        &'a self,
        organization_id: uuid::Uuid,
        created_by: Option<uuid::Uuid>,
        contact: &'a ParsedContact,
    ) -> BoxFuture<'a, ServiceResult<uuid::Uuid>>;

    fn insert_emails<'a>(
        &'a self,
        contact_id: uuid::Uuid,
        emails: &'a [ParsedEmail],
    ) -> BoxFuture<'a, ServiceResult<()>>;

    fn insert_phones<'a>(
        &'a self,
        contact_id: uuid::Uuid,
        phones: &'a [ParsedPhone],
    ) -> BoxFuture<'a, ServiceResult<()>>;

    fn insert_addresses<'a>(
        &'a self,
        contact_id: uuid::Uuid,
        addresses: &'a [ParsedAddress],
    ) -> BoxFuture<'a, ServiceResult<()>>;
}

/// Reads a normalized `YYYY-MM-DD` birthday as a calendar date.
///
/// Digit strings that do not name a real date (month 13, February 30)
/// yield `None`.
#[must_use]
pub fn birthday_date(birthday: &str) -> Option<chrono::NaiveDate> {
    let date = chrono::NaiveDate::parse_from_str(birthday, "%Y-%m-%d").ok();

    if date.is_none() {
        tracing::debug!(birthday, "Dropping birthday that is not a calendar date");
    }

    date
}

/// Converts a list index to a stored position.
fn position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
