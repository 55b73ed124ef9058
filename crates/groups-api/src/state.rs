//! Application state with repository-based storage.
//!
//! The store client is constructed once at startup and injected here; request
//! handlers never touch configuration or build clients themselves.

use std::sync::Arc;

use groups_core::storage::GroupRepository;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler. Holds the repository trait object for
/// store access; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Group repository backing `/groups`.
    pub group_repo: Arc<dyn GroupRepository>,
}

impl AppState {
    /// Creates an AppState around an already-constructed repository.
    pub fn new(group_repo: Arc<dyn GroupRepository>) -> Self {
        Self { group_repo }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::config::Config;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for testing and local development without AWS access.
        pub async fn from_config(_config: &Config) -> Result<Self, anyhow::Error> {
            Ok(Self::new(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::config::Config;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// Uses the AWS SDK default credential chain and the table named by
        /// the configuration.
        pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let repo = DynamoDbRepository::new(client, config.table_name.clone());

            Ok(Self::new(Arc::new(repo)))
        }
    }
}
