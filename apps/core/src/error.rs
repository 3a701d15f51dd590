use std::io;
use thiserror::Error;

/// Error type for the lab's caller layer (workspace, storage, configuration).
///
/// The generation and analysis engine never produces one of these: it answers
/// insufficient input with empty results instead.
#[derive(Debug, Error)]
pub enum LabError {
    /// User-facing validation failures (too few elements, blank names, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The key-value store could not complete an operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored blob or CLI payload could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint tag that is not one of the five known categories.
    #[error("Unknown constraint category: {0}")]
    UnknownConstraint(String),
}

/// Convenience alias used throughout the caller layer.
pub type Result<T> = std::result::Result<T, LabError>;

impl Clone for LabError {
    fn clone(&self) -> Self {
        match self {
            LabError::Validation(s) => LabError::Validation(s.clone()),
            LabError::Config(s) => LabError::Config(s.clone()),
            LabError::Storage(s) => LabError::Storage(s.clone()),
            LabError::Io(e) => LabError::Io(io::Error::new(e.kind(), e.to_string())),
            LabError::Serialization(s) => LabError::Serialization(s.clone()),
            LabError::UnknownConstraint(s) => LabError::UnknownConstraint(s.clone()),
        }
    }
}

impl From<serde_json::Error> for LabError {
    fn from(err: serde_json::Error) -> Self {
        LabError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for LabError {
    fn from(err: validator::ValidationErrors) -> Self {
        LabError::Config(format!("Invalid configuration: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LabError::Validation("too few elements".to_string());
        assert_eq!(err.to_string(), "Validation error: too few elements");

        let err = LabError::UnknownConstraint("quantum-foam".to_string());
        assert_eq!(err.to_string(), "Unknown constraint category: quantum-foam");
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LabError = json_err.into();
        assert!(matches!(err, LabError::Serialization(_)));
    }

    #[test]
    fn test_clone_preserves_io_kind() {
        let err = LabError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match err.clone() {
            LabError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
