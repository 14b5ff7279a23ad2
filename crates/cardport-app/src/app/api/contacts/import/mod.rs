//! Bulk vCard import endpoint.

mod payload;

use salvo::http::header::CONTENT_LENGTH;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, handler};

use cardport_service::auth::{depot::get_user_from_depot, resolve_organization};
use cardport_service::import::{ImportTarget, import_vcards};

use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult, write_app_error};
use crate::store_handler::get_store_from_depot;
use payload::{ImportRequest, ImportResponse};

/// Room for multipart boundaries and headers on top of the vCard text itself.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// ## Summary
/// Handles `POST /api/contacts/import`.
///
/// Accepts the vCard text as a multipart `file` field, a JSON `{ "vcard": ... }`
/// body, or a raw `text/vcard` body, and imports every contact it holds into
/// the caller's organization.
///
/// ## Errors
/// Returns 401 without an authenticated user, 404 when the user has no
/// organization, 400 for missing content or input without vCards, 413 for
/// oversized input and 500 for storage failures.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn import(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match handle_import(req, depot).await {
        Ok(response) => res.render(Json(response)),
        Err(e) => write_app_error(res, &e),
    }
}

async fn handle_import(req: &mut Request, depot: &Depot) -> AppResult<ImportResponse> {
    let user = get_user_from_depot(depot)?.clone();
    let config = get_config_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;

    let organization_id = resolve_organization(store.as_ref(), &user).await?;

    let max_bytes = config.import.max_bytes;

    if let Some(size) = declared_length(req)
        && size > max_bytes.saturating_add(BODY_OVERHEAD_BYTES)
    {
        return Err(AppError::PayloadTooLarge {
            size,
            max: max_bytes,
        });
    }

    req.set_secure_max_size(max_bytes.saturating_add(BODY_OVERHEAD_BYTES));

    let content = read_content(req).await?;

    if content.trim().is_empty() {
        return Err(AppError::MissingContent);
    }

    if content.len() > max_bytes {
        return Err(AppError::PayloadTooLarge {
            size: content.len(),
            max: max_bytes,
        });
    }

    tracing::debug!(
        bytes = content.len(),
        organization_id = %organization_id,
        "Importing vCard content"
    );

    let target = ImportTarget {
        organization_id,
        created_by: Some(user.user_id),
    };

    let summary = import_vcards(store.as_ref(), target, &content).await?;

    Ok(summary.into())
}

fn declared_length(req: &Request) -> Option<usize> {
    req.headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Extracts the vCard text according to the request's content type.
///
/// Returns an empty string when the request carries no usable content.
async fn read_content(req: &mut Request) -> AppResult<String> {
    let essence = req
        .content_type()
        .map(|mime| mime.essence_str().to_ascii_lowercase())
        .unwrap_or_default();

    match essence.as_str() {
        "multipart/form-data" => {
            let Some(path) = req.file("file").await.map(|file| file.path().clone()) else {
                return Ok(String::new());
            };

            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| AppError::InvalidBody(e.to_string()))?;

            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        "application/json" => {
            let body: ImportRequest = req
                .parse_json()
                .await
                .map_err(|e| AppError::InvalidBody(e.to_string()))?;

            Ok(body.vcard.unwrap_or_default())
        }
        "text/vcard" | "text/x-vcard" | "text/directory" | "text/plain" => {
            let bytes = req
                .payload()
                .await
                .map_err(|e| AppError::InvalidBody(e.to_string()))?;

            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        _ => {
            tracing::debug!(content_type = %essence, "Unsupported import content type");
            Ok(String::new())
        }
    }
}
