//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use groups_core::group::Group;
use groups_core::storage::{GroupRepository, RepositoryError, Result, ScanKey, ScanPage};

/// In-memory storage backend for testing and local development.
///
/// Groups live in a `BTreeMap` keyed by id, so scans iterate in ascending id
/// order and a cursor resumes deterministically. Data is not persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    groups: Arc<RwLock<BTreeMap<String, Group>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupRepository for InMemoryRepository {
    async fn scan_groups(&self, limit: i32, start_key: Option<ScanKey>) -> Result<ScanPage> {
        // The table's only key attribute is `id`; a cursor without it cannot
        // have come from this store.
        let start_after = match &start_key {
            Some(key) => Some(
                key.get("id")
                    .ok_or_else(|| {
                        RepositoryError::InvalidData(
                            "scan key is missing the id attribute".to_string(),
                        )
                    })?
                    .to_string(),
            ),
            None => None,
        };

        let limit = usize::try_from(limit).unwrap_or(0);
        let groups = self.groups.read().await;

        let iter: Box<dyn Iterator<Item = &Group>> = match &start_after {
            Some(id) => Box::new(
                groups
                    .range::<String, _>((Bound::Excluded(id.clone()), Bound::Unbounded))
                    .map(|(_, group)| group),
            ),
            None => Box::new(groups.values()),
        };

        // Read one past the page to know whether a resume position exists.
        let mut items: Vec<Group> = iter.take(limit + 1).cloned().collect();
        let last_key = if items.len() > limit {
            items.truncate(limit);
            items.last().map(|group| ScanKey::for_id(&group.id))
        } else {
            None
        };

        Ok(ScanPage { items, last_key })
    }

    async fn create_group(&self, group: &Group) -> Result<()> {
        let mut groups = self.groups.write().await;
        if groups.contains_key(&group.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Group",
                id: group.id.clone(),
            });
        }
        groups.insert(group.id.clone(), group.clone());
        Ok(())
    }
}
