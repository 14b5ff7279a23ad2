use serde::{Deserialize, Serialize};

use cardport_service::import::ImportSummary;

/// JSON request body: `{ "vcard": "BEGIN:VCARD..." }`.
#[derive(Debug, Default, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub vcard: Option<String>,
}

/// Successful import response.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub imported: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub total: usize,
}

impl From<ImportSummary> for ImportResponse {
    fn from(summary: ImportSummary) -> Self {
        Self {
            success: true,
            imported: summary.imported,
            errors: summary.errors,
            total: summary.total,
        }
    }
}
