use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use cardport_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] cardport_core::error::CoreError),

    #[error("No file or vCard content provided")]
    MissingContent,

    #[error("Import exceeds maximum size ({size} > {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl AppError {
    /// ## Summary
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(ServiceError::NotAuthenticated) => StatusCode::UNAUTHORIZED,
            Self::ServiceError(ServiceError::NoOrganization) => StatusCode::NOT_FOUND,
            Self::ServiceError(ServiceError::NoVCardsFound)
            | Self::MissingContent
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ServiceError(_) | Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ## Summary
    /// Returns the message shown to clients. Internal failures are not detailed.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::ServiceError(ServiceError::NotAuthenticated) => "Unauthorized".to_string(),
            Self::ServiceError(ServiceError::NoOrganization | ServiceError::NoVCardsFound)
            | Self::MissingContent => self.to_string(),
            Self::PayloadTooLarge { .. } => "Import exceeds maximum size".to_string(),
            Self::InvalidBody(_) => "Invalid request body".to_string(),
            Self::ServiceError(_) | Self::CoreError(_) => "Internal server error".to_string(),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Writes `error` as a JSON `{ "error": ... }` body with its status code.
pub fn write_app_error(res: &mut salvo::Response, error: &AppError) {
    let status = error.status_code();

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, status = %status, "Request rejected");
    }

    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: error.public_message(),
    }));
}
