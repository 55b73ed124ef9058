//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! schema-less group record. Testable in isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Value};

use groups_core::group::Group;
use groups_core::storage::{RepositoryError, ScanKey};

/// Convert a Group to a DynamoDB item.
pub fn group_to_item(group: &Group) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(group.id.clone()));
    for (name, value) in &group.attributes {
        item.insert(name.clone(), json_to_attr(value)?);
    }
    Ok(item)
}

/// Convert a DynamoDB item to a Group.
pub fn item_to_group(item: &HashMap<String, AttributeValue>) -> Result<Group, RepositoryError> {
    let id = get_string(item, "id")?;

    let mut attributes = Map::new();
    for (name, value) in item {
        if name == "id" {
            continue;
        }
        attributes.insert(name.clone(), attr_to_json(value)?);
    }

    Ok(Group { id, attributes })
}

/// Convert a scan cursor to DynamoDB key attributes.
pub fn key_to_attrs(key: ScanKey) -> HashMap<String, AttributeValue> {
    key.0
        .into_iter()
        .map(|(name, value)| (name, AttributeValue::S(value)))
        .collect()
}

/// Convert a DynamoDB last-evaluated key to a scan cursor.
///
/// The groups table's key schema only carries string attributes, so anything
/// else in the key is corrupt data.
pub fn attrs_to_key(attrs: HashMap<String, AttributeValue>) -> Result<ScanKey, RepositoryError> {
    attrs
        .into_iter()
        .map(|(name, value)| match value {
            AttributeValue::S(s) => Ok((name, s)),
            other => Err(RepositoryError::InvalidData(format!(
                "Unsupported key attribute type for '{}': {:?}",
                name, other
            ))),
        })
        .collect::<Result<BTreeMap<_, _>, _>>()
        .map(ScanKey)
}

fn json_to_attr(value: &Value) -> Result<AttributeValue, RepositoryError> {
    match value {
        Value::Null => Ok(AttributeValue::Null(true)),
        Value::Bool(b) => Ok(AttributeValue::Bool(*b)),
        Value::Number(n) => Ok(AttributeValue::N(n.to_string())),
        Value::String(s) => Ok(AttributeValue::S(s.clone())),
        Value::Array(values) => Ok(AttributeValue::L(
            values
                .iter()
                .map(json_to_attr)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        Value::Object(map) => Ok(AttributeValue::M(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), json_to_attr(v)?)))
                .collect::<Result<HashMap<_, _>, RepositoryError>>()?,
        )),
    }
}

fn attr_to_json(value: &AttributeValue) -> Result<Value, RepositoryError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => n
            .parse::<serde_json::Number>()
            .map(Value::Number)
            .map_err(|_| RepositoryError::InvalidData(format!("Unparseable number: {}", n))),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => Ok(Value::Array(
            values
                .iter()
                .map(attr_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        AttributeValue::M(map) => Ok(Value::Object(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), attr_to_json(v)?)))
                .collect::<Result<Map<_, _>, RepositoryError>>()?,
        )),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

fn get_string(
    item: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<String, RepositoryError> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| {
            RepositoryError::InvalidData(format!("Missing or non-string attribute: {}", name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_group() -> Group {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), json!("Dogs"));
        attributes.insert("memberCount".to_string(), json!(12));
        attributes.insert("open".to_string(), json!(true));
        attributes.insert("tags".to_string(), json!(["pets", "outdoors"]));
        attributes.insert("owner".to_string(), json!({"name": "sam"}));
        Group { id: "g-1".to_string(), attributes }
    }

    #[test]
    fn test_group_round_trips_through_item() {
        let group = sample_group();

        let item = group_to_item(&group).unwrap();
        let restored = item_to_group(&item).unwrap();

        assert_eq!(restored, group);
    }

    #[test]
    fn test_item_without_id_is_invalid() {
        let mut item = HashMap::new();
        item.insert("name".to_string(), AttributeValue::S("x".to_string()));

        let err = item_to_group(&item).unwrap_err();

        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_key_round_trips_through_attrs() {
        let key = ScanKey::for_id("abc");

        let attrs = key_to_attrs(key.clone());
        let restored = attrs_to_key(attrs).unwrap();

        assert_eq!(restored, key);
    }

    #[test]
    fn test_non_string_key_attribute_is_invalid() {
        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), AttributeValue::N("7".to_string()));

        let err = attrs_to_key(attrs).unwrap_err();

        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_binary_attribute_is_invalid() {
        let value = AttributeValue::B(aws_sdk_dynamodb::primitives::Blob::new(vec![1, 2]));

        let err = attr_to_json(&value).unwrap_err();

        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }
}
