//! DynamoDB repository implementation.
//!
//! Implements `groups_core::storage::GroupRepository` against a single flat
//! table whose partition key is `id`.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use groups_core::group::Group;
use groups_core::storage::{GroupRepository, Result, ScanKey, ScanPage};

use super::conversions::{attrs_to_key, group_to_item, item_to_group, key_to_attrs};
use super::error::{map_put_item_error, map_scan_error};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl GroupRepository for DynamoDbRepository {
    async fn scan_groups(&self, limit: i32, start_key: Option<ScanKey>) -> Result<ScanPage> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit)
            .set_exclusive_start_key(start_key.map(key_to_attrs))
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_group)
            .collect::<Result<Vec<_>>>()?;

        let last_key = result.last_evaluated_key.map(attrs_to_key).transpose()?;

        Ok(ScanPage { items, last_key })
    }

    async fn create_group(&self, group: &Group) -> Result<()> {
        let item = group_to_item(group)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Group", group.id.clone()))?;

        Ok(())
    }
}
