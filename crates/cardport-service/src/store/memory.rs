//! In-memory contact store.
//!
//! Backs the `memory` storage backend and the service tests.

use std::collections::HashMap;
use std::sync::Arc;

use cardport_rfc::rfc::vcard::{ParsedAddress, ParsedContact, ParsedEmail, ParsedPhone};
use futures::future::BoxFuture;
use tokio::sync::Mutex;

use super::ContactStore;
use crate::error::{ServiceError, ServiceResult};

/// A contact as held by [`MemoryContactStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContact {
    pub id: uuid::Uuid,
    pub organization_id: uuid::Uuid,
    pub created_by: Option<uuid::Uuid>,
    /// Own fields only; sub-records are filled by the `insert_*` calls.
    pub contact: ParsedContact,
}

#[derive(Debug, Default)]
struct MemoryState {
    memberships: HashMap<uuid::Uuid, uuid::Uuid>,
    contacts: Vec<StoredContact>,
}

impl MemoryState {
    fn contact_mut(&mut self, contact_id: uuid::Uuid) -> ServiceResult<&mut StoredContact> {
        self.contacts
            .iter_mut()
            .find(|stored| stored.id == contact_id)
            .ok_or_else(|| ServiceError::StoreError(format!("contact {contact_id} does not exist")))
    }
}

/// Keeps contacts in process memory. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryContactStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryContactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `user_id` belongs to `organization_id`.
    pub async fn add_member(&self, organization_id: uuid::Uuid, user_id: uuid::Uuid) {
        self.state
            .lock()
            .await
            .memberships
            .insert(user_id, organization_id);
    }

    /// Returns a snapshot of every stored contact in insertion order.
    pub async fn contacts(&self) -> Vec<StoredContact> {
        self.state.lock().await.contacts.clone()
    }
}

impl ContactStore for MemoryContactStore {
    fn organization_for_user(
        &self,
        user_id: uuid::Uuid,
    ) -> BoxFuture<'_, ServiceResult<Option<uuid::Uuid>>> {
        Box::pin(async move { Ok(self.state.lock().await.memberships.get(&user_id).copied()) })
    }

    fn insert_contact<'a>(
        &'a self,
        organization_id: uuid::Uuid,
        created_by: Option<uuid::Uuid>,
        contact: &'a ParsedContact,
    ) -> BoxFuture<'a, ServiceResult<uuid::Uuid>> {
        Box::pin(async move {
            let id = uuid::Uuid::now_v7();
            let own_fields = ParsedContact {
                emails: Vec::new(),
                phones: Vec::new(),
                addresses: Vec::new(),
                ..contact.clone()
            };

            self.state.lock().await.contacts.push(StoredContact {
                id,
                organization_id,
                created_by,
                contact: own_fields,
            });

            Ok(id)
        })
    }

    fn insert_emails<'a>(
        &'a self,
        contact_id: uuid::Uuid,
        emails: &'a [ParsedEmail],
    ) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;
            state
                .contact_mut(contact_id)?
                .contact
                .emails
                .extend_from_slice(emails);
            Ok(())
        })
    }

    fn insert_phones<'a>(
        &'a self,
        contact_id: uuid::Uuid,
        phones: &'a [ParsedPhone],
    ) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;
            state
                .contact_mut(contact_id)?
                .contact
                .phones
                .extend_from_slice(phones);
            Ok(())
        })
    }

    fn insert_addresses<'a>(
        &'a self,
        contact_id: uuid::Uuid,
        addresses: &'a [ParsedAddress],
    ) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;
            state
                .contact_mut(contact_id)?
                .contact
                .addresses
                .extend_from_slice(addresses);
            Ok(())
        })
    }
}
