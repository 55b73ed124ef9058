//! Seed command implementation.

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::Value;

use groups_core::group::{CreateGroupRequest, Group};

use super::error::{DynamodbError, Result};

const SAMPLE_GROUPS: &[(&str, &str)] = &[
    ("Dog lovers", "Photos and meetups for dog owners"),
    ("Board games", "Weekly game night planning"),
    ("Trail runners", "Routes, races and Sunday long runs"),
    ("Home cooks", "Recipes and kitchen experiments"),
    ("Book club", "One book a month, no spoilers"),
    ("Film nights", "Screenings and post-movie arguments"),
    ("Urban sketchers", "Drawing the city together"),
    ("Chess circle", "Casual games and openings study"),
];

/// Generate sample groups, cycling the pool and numbering repeats.
pub fn generate_seed_groups(count: u32) -> Vec<Group> {
    (0..count as usize)
        .map(|i| {
            let (name, description) = SAMPLE_GROUPS[i % SAMPLE_GROUPS.len()];
            let name = if i < SAMPLE_GROUPS.len() {
                name.to_string()
            } else {
                format!("{} #{}", name, i / SAMPLE_GROUPS.len() + 1)
            };
            CreateGroupRequest::new(name)
                .with_description(description)
                .into_group()
        })
        .collect()
}

/// Insert the groups one item at a time.
///
/// Seed attributes are all strings, so the conversion stays flat.
pub async fn insert_groups(client: &Client, table_name: &str, groups: &[Group]) -> Result<()> {
    for group in groups {
        let mut request = client
            .put_item()
            .table_name(table_name)
            .item("id", AttributeValue::S(group.id.clone()));

        for (name, value) in &group.attributes {
            if let Value::String(s) = value {
                request = request.item(name.clone(), AttributeValue::S(s.clone()));
            }
        }

        request
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.into_service_error().to_string()))?;
    }

    Ok(())
}
