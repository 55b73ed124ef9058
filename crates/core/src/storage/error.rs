use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Group",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Group already exists: abc-123");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("throughput exceeded".to_string());
        assert_eq!(error.to_string(), "Query failed: throughput exceeded");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("missing attribute".to_string());
        assert_eq!(error.to_string(), "Invalid data: missing attribute");
    }
}
