//! Error types for cardview

use thiserror::Error;

/// Main error type for profile loading and contact export
#[derive(Error, Debug)]
pub enum CardError {
    /// Profile record failed validation
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Profile document could not be parsed
    #[error("Profile format error: {0}")]
    ProfileFormat(#[from] serde_json::Error),

    /// Host could not create a temporary reference for the payload
    #[error("Failed to create temporary reference: {0}")]
    CreateReference(String),

    /// Host could not save the referenced payload
    #[error("Failed to trigger save: {0}")]
    TriggerSave(String),

    /// Host could not release a temporary reference
    #[error("Failed to release temporary reference: {0}")]
    ReleaseReference(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::InvalidProfile("name must not be empty".to_string());
        assert_eq!(format!("{}", err), "Invalid profile: name must not be empty");

        let err = CardError::TriggerSave("disk full".to_string());
        assert_eq!(format!("{}", err), "Failed to trigger save: disk full");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let card_err: CardError = json_err.into();
        assert!(matches!(card_err, CardError::ProfileFormat(_)));
    }
}
