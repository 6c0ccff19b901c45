/// Core error types for Cifra Player
use thiserror::Error;

/// Result type alias using `CifraError`
pub type Result<T> = std::result::Result<T, CifraError>;

/// Core error type for Cifra Player
#[derive(Error, Debug)]
pub enum CifraError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record ("Song", "Potpourri")
        entity: String,
        /// Identifier that was looked up
        id: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CifraError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = CifraError::not_found("Song", "42");
        assert_eq!(err.to_string(), "Song not found: 42");
    }

    #[test]
    fn invalid_input_message() {
        let err = CifraError::invalid_input("potpourri name is empty");
        assert_eq!(err.to_string(), "Invalid input: potpourri name is empty");
    }

    #[test]
    fn serialization_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: CifraError = parse.unwrap_err().into();
        assert!(matches!(err, CifraError::Serialization(_)));
    }
}
