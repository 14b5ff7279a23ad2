use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] cardport_db::error::DbError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("No organization found")]
    NoOrganization,

    #[error("No valid vCards found")]
    NoVCardsFound,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Store error: {0}")]
    StoreError(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
