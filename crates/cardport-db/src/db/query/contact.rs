//! Contact inserts.
//!
//! Each function issues a single statement; callers decide how failures
//! across statements are handled.

use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{contact, contact_address, contact_email, contact_phone};
use crate::error::DbResult;
use crate::model::contact::{NewContact, NewContactAddress, NewContactEmail, NewContactPhone};

/// ## Summary
/// Inserts a contact row and returns its id.
///
/// ## Errors
/// Returns an error if the insert fails.
#[tracing::instrument(skip_all, fields(organization_id = %new_contact.organization_id))]
pub async fn insert_contact(
    conn: &mut DbConnection<'_>,
    new_contact: &NewContact<'_>,
) -> DbResult<uuid::Uuid> {
    let id = diesel::insert_into(contact::table)
        .values(new_contact)
        .returning(contact::id)
        .get_result::<uuid::Uuid>(conn)
        .await?;

    tracing::debug!(contact_id = %id, "Contact inserted");

    Ok(id)
}

/// ## Summary
/// Inserts email rows in one statement. An empty slice is a no-op.
///
/// ## Errors
/// Returns an error if the insert fails.
pub async fn insert_emails(
    conn: &mut DbConnection<'_>,
    emails: &[NewContactEmail<'_>],
) -> DbResult<usize> {
    if emails.is_empty() {
        return Ok(0);
    }

    Ok(diesel::insert_into(contact_email::table)
        .values(emails)
        .execute(conn)
        .await?)
}

/// ## Summary
/// Inserts phone rows in one statement. An empty slice is a no-op.
///
/// ## Errors
/// Returns an error if the insert fails.
pub async fn insert_phones(
    conn: &mut DbConnection<'_>,
    phones: &[NewContactPhone<'_>],
) -> DbResult<usize> {
    if phones.is_empty() {
        return Ok(0);
    }

    Ok(diesel::insert_into(contact_phone::table)
        .values(phones)
        .execute(conn)
        .await?)
}

/// ## Summary
/// Inserts address rows in one statement. An empty slice is a no-op.
///
/// ## Errors
/// Returns an error if the insert fails.
pub async fn insert_addresses(
    conn: &mut DbConnection<'_>,
    addresses: &[NewContactAddress<'_>],
) -> DbResult<usize> {
    if addresses.is_empty() {
        return Ok(0);
    }

    Ok(diesel::insert_into(contact_address::table)
        .values(addresses)
        .execute(conn)
        .await?)
}
