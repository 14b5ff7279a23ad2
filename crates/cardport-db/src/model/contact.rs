use diesel::prelude::*;

use crate::db::schema;

/// Value stored in `contact.source` for rows created by a vCard import.
pub const SOURCE_VCARD_IMPORT: &str = "vcard_import";

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::contact)]
pub struct NewContact<'a> {
    pub id: uuid::Uuid,
    pub organization_id: uuid::Uuid,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub company: Option<&'a str>,
    pub job_title: Option<&'a str>,
    pub birthday: Option<chrono::NaiveDate>,
    pub notes: Option<&'a str>,
    pub photo_url: Option<&'a str>,
    pub source: &'a str,
    pub created_by: Option<uuid::Uuid>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::contact_email)]
pub struct NewContactEmail<'a> {
    pub id: uuid::Uuid,
    pub contact_id: uuid::Uuid,
    pub email: &'a str,
    pub email_type: &'a str,
    pub is_primary: bool,
    pub position: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::contact_phone)]
pub struct NewContactPhone<'a> {
    pub id: uuid::Uuid,
    pub contact_id: uuid::Uuid,
    pub phone: &'a str,
    pub phone_type: &'a str,
    pub is_primary: bool,
    pub position: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::contact_address)]
pub struct NewContactAddress<'a> {
    pub id: uuid::Uuid,
    pub contact_id: uuid::Uuid,
    pub street: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub country: Option<&'a str>,
    pub address_type: &'a str,
    pub position: i32,
}
