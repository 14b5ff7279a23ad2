//! Bulk contact import from vCard text.

use cardport_rfc::rfc::vcard::{ParsedContact, parse_contact, split_vcards};
use serde::Serialize;

use crate::error::{ServiceError, ServiceResult};
use crate::store::ContactStore;

/// Where imported contacts are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportTarget {
    pub organization_id: uuid::Uuid,
    /// User performing the import.
    pub created_by: Option<uuid::Uuid>,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Number of vCard blocks found, not the number imported.
    pub total: usize,
    pub imported: usize,
    /// Skipped contacts and per-contact failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// ## Summary
/// Imports every vCard in `input` into the target organization.
///
/// Contacts are processed one at a time. A contact with no name and no
/// organization is skipped with a warning. A failed contact insert is
/// recorded and the batch continues. Emails, phones and addresses are
/// written after their contact, each group on its own; a failed group is
/// recorded but the contact still counts as imported.
///
/// ## Errors
/// Returns [`ServiceError::NoVCardsFound`] if the input holds no vCard block.
#[tracing::instrument(skip(store, input), fields(
    organization_id = %target.organization_id,
    input_len = input.len()
))]
pub async fn import_vcards(
    store: &dyn ContactStore,
    target: ImportTarget,
    input: &str,
) -> ServiceResult<ImportSummary> {
    let blocks = split_vcards(input);

    if blocks.is_empty() {
        tracing::warn!("Import input contains no vCards");
        return Err(ServiceError::NoVCardsFound);
    }

    let mut summary = ImportSummary {
        total: blocks.len(),
        ..ImportSummary::default()
    };

    for (index, block) in blocks.into_iter().enumerate() {
        let number = index + 1;
        let contact = parse_contact(block);

        if contact.is_empty() {
            tracing::debug!(number, "Skipping contact without name or organization");
            summary
                .errors
                .push(format!("Contact {number}: skipped, no name or organization"));
            continue;
        }

        if import_contact(store, target, number, &contact, &mut summary.errors).await {
            summary.imported += 1;
        }
    }

    tracing::info!(
        total = summary.total,
        imported = summary.imported,
        warnings = summary.errors.len(),
        "vCard import finished"
    );

    Ok(summary)
}

/// Writes one contact and its sub-records. Returns whether the contact row
/// was created.
async fn import_contact(
    store: &dyn ContactStore,
    target: ImportTarget,
    number: usize,
    contact: &ParsedContact,
    errors: &mut Vec<String>,
) -> bool {
    let label = contact.display_name().unwrap_or_default();

    let contact_id = match store
        .insert_contact(target.organization_id, target.created_by, contact)
        .await
    {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(number, error = %e, "Failed to insert contact");
            errors.push(format!("Contact {number} ({label}): failed to import: {e}"));
            return false;
        }
    };

    tracing::debug!(number, contact_id = %contact_id, "Contact imported");

    let groups = [
        (
            "emails",
            !contact.emails.is_empty(),
            store.insert_emails(contact_id, &contact.emails),
        ),
        (
            "phones",
            !contact.phones.is_empty(),
            store.insert_phones(contact_id, &contact.phones),
        ),
        (
            "addresses",
            !contact.addresses.is_empty(),
            store.insert_addresses(contact_id, &contact.addresses),
        ),
    ];

    for (group, present, write) in groups {
        if !present {
            continue;
        }

        if let Err(e) = write.await {
            tracing::warn!(number, group, error = %e, "Failed to save contact details");
            errors.push(format!("Contact {number} ({label}): failed to save {group}: {e}"));
        }
    }

    true
}
