use async_trait::async_trait;

use crate::group::Group;

use super::{Result, ScanKey, ScanPage};

/// Repository for group operations.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Reads one bounded page of groups, resuming strictly after `start_key`
    /// when one is given. Issues exactly one scan against the store.
    async fn scan_groups(&self, limit: i32, start_key: Option<ScanKey>) -> Result<ScanPage>;

    /// Persists a new group. Fails if a record with the same id exists.
    async fn create_group(&self, group: &Group) -> Result<()>;
}
