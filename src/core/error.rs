use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Storage write error: {0}")]
    StorageWrite(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Geocoding failed: {0}")]
    GeocodeFailure(String),
}

impl AppError {
    /// Message suitable for a user-facing alert. Internal failures are logged
    /// here and replaced with a generic line; the rest pass through as-is.
    pub fn user_message(&self) -> String {
        match self {
            AppError::StorageRead(ref detail) => {
                tracing::error!("Storage read error: {}", detail);
                "Saved data could not be read".to_string()
            }
            AppError::StorageWrite(ref detail) => {
                tracing::error!("Storage write error: {}", detail);
                "Your data could not be saved".to_string()
            }
            AppError::Serialization(ref e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Saved data could not be read".to_string()
            }
            AppError::Validation(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::PermissionDenied(ref msg) => msg.clone(),
            AppError::LocationUnavailable(ref msg) => msg.clone(),
            AppError::GeocodeFailure(ref msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
