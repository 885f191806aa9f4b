//! Error types for the kanban engine

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in kanban operations.
///
/// None of these are fatal: a failed transition leaves the previous board
/// current, and a failed load falls back to the seed board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Malformed or out-of-range move description
    #[error("invalid move: {message}")]
    InvalidMove { message: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column id already in use
    #[error("duplicate column ID: {id}")]
    DuplicateColumn { id: String },

    /// Stored snapshot could not be decoded into a consistent board
    #[error("cannot decode snapshot '{key}': {message}")]
    PersistenceDecode { key: String, message: String },

    /// Storage key cannot be used by the store
    #[error("invalid storage key: {key:?}")]
    InvalidKey { key: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an invalid move error
    pub fn invalid_move(message: impl Into<String>) -> Self {
        Self::InvalidMove {
            message: message.into(),
        }
    }

    /// Create a snapshot decode error
    pub fn decode(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PersistenceDecode {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ColumnNotFound { .. } | Self::TaskNotFound { .. })
    }
}

impl From<figment::Error> for BoardError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::ColumnNotFound {
            id: "column-9".into(),
        };
        assert_eq!(err.to_string(), "column not found: column-9");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_move() {
        let err = BoardError::invalid_move("source index 4 out of bounds");
        assert!(err.to_string().contains("out of bounds"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_decode_error() {
        let err = BoardError::decode("kanban-board", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "cannot decode snapshot 'kanban-board': expected value at line 1"
        );
    }
}
