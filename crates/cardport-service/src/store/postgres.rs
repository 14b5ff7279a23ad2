//! Postgres-backed contact store.

use cardport_db::db::{
    DbProvider,
    connection::DbPool,
    query::{contact as contact_query, organization as organization_query},
};
use cardport_db::model::contact::{
    NewContact, NewContactAddress, NewContactEmail, NewContactPhone, SOURCE_VCARD_IMPORT,
};
use cardport_rfc::rfc::vcard::{ParsedAddress, ParsedContact, ParsedEmail, ParsedPhone};
use futures::future::BoxFuture;

use super::{ContactStore, birthday_date, position};
use crate::error::ServiceResult;

/// Stores imported contacts in Postgres.
#[derive(Clone)]
pub struct PgContactStore {
    pool: DbPool,
}

impl PgContactStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ContactStore for PgContactStore {
    fn organization_for_user(
        &self,
        user_id: uuid::Uuid,
    ) -> BoxFuture<'_, ServiceResult<Option<uuid::Uuid>>> {
        Box::pin(async move {
            let mut conn = self.pool.get_connection().await?;
            Ok(organization_query::find_organization_for_user(&mut conn, user_id).await?)
        })
    }

    fn insert_contact<'a>(
        &'a self,
        organization_id: uuid::Uuid,
        created_by: Option<uuid::Uuid>,
        contact: &'a ParsedContact,
    ) -> BoxFuture<'a, ServiceResult<uuid::Uuid>> {
        Box::pin(async move {
            let new_contact = NewContact {
                id: uuid::Uuid::now_v7(),
                organization_id,
                first_name: contact.first_name.as_deref(),
                last_name: contact.last_name.as_deref(),
                company: contact.organization.as_deref(),
                job_title: contact.job_title.as_deref(),
                birthday: contact.birthday.as_deref().and_then(birthday_date),
                notes: contact.notes.as_deref(),
                photo_url: contact.photo_url.as_deref(),
                source: SOURCE_VCARD_IMPORT,
                created_by,
            };

            let mut conn = self.pool.get_connection().await?;
            Ok(contact_query::insert_contact(&mut conn, &new_contact).await?)
        })
    }

    fn insert_emails<'a>(
        &'a self,
        contact_id: uuid::Uuid,
        emails: &'a [ParsedEmail],
    ) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let rows: Vec<NewContactEmail<'_>> = emails
                .iter()
                .enumerate()
                .map(|(index, email)| NewContactEmail {
                    id: uuid::Uuid::now_v7(),
                    contact_id,
                    email: &email.email,
                    email_type: &email.kind,
                    is_primary: email.is_primary,
                    position: position(index),
                })
                .collect();

            let mut conn = self.pool.get_connection().await?;
            contact_query::insert_emails(&mut conn, &rows).await?;
            Ok(())
        })
    }

    fn insert_phones<'a>(
        &'a self,
        contact_id: uuid::Uuid,
        phones: &'a [ParsedPhone],
    ) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let rows: Vec<NewContactPhone<'_>> = phones
                .iter()
                .enumerate()
                .map(|(index, phone)| NewContactPhone {
                    id: uuid::Uuid::now_v7(),
                    contact_id,
                    phone: &phone.phone,
                    phone_type: &phone.kind,
                    is_primary: phone.is_primary,
                    position: position(index),
                })
                .collect();

            let mut conn = self.pool.get_connection().await?;
            contact_query::insert_phones(&mut conn, &rows).await?;
            Ok(())
        })
    }

    fn insert_addresses<'a>(
        &'a self,
        contact_id: uuid::Uuid,
        addresses: &'a [ParsedAddress],
    ) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let rows: Vec<NewContactAddress<'_>> = addresses
                .iter()
                .enumerate()
                .map(|(index, address)| NewContactAddress {
                    id: uuid::Uuid::now_v7(),
                    contact_id,
                    street: address.street.as_deref(),
                    city: address.city.as_deref(),
                    state: address.state.as_deref(),
                    postal_code: address.postal_code.as_deref(),
                    country: address.country.as_deref(),
                    address_type: &address.kind,
                    position: position(index),
                })
                .collect();

            let mut conn = self.pool.get_connection().await?;
            contact_query::insert_addresses(&mut conn, &rows).await?;
            Ok(())
        })
    }
}
