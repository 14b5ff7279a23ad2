//! Organization membership lookups.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::organization_member;
use crate::error::DbResult;

/// ## Summary
/// Returns the organization a user belongs to.
///
/// A user with several memberships resolves to the oldest one.
///
/// ## Errors
/// Returns an error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn find_organization_for_user(
    conn: &mut DbConnection<'_>,
    user_id: uuid::Uuid,
) -> DbResult<Option<uuid::Uuid>> {
    let organization_id = organization_member::table
        .filter(organization_member::user_id.eq(user_id))
        .order(organization_member::created_at.asc())
        .select(organization_member::organization_id)
        .first::<uuid::Uuid>(conn)
        .await
        .optional()?;

    tracing::trace!(found = organization_id.is_some(), "Organization lookup complete");

    Ok(organization_id)
}
