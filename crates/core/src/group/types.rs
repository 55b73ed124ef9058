use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A stored group record.
///
/// The table is schema-less beyond its partition key, so everything except
/// `id` lives in a flattened attribute map and round-trips through the API
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Group {
    /// Creates a new group with a fresh UUID v4 identifier.
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            attributes,
        }
    }

    /// Sets a specific ID for this group (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_assigns_a_unique_id() {
        let a = Group::new(Map::new());
        let b = Group::new(Map::new());

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn serializes_as_a_flat_object() {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), json!("Dogs"));
        attributes.insert("memberCount".to_string(), json!(12));
        let group = Group::new(attributes).with_id("g-1");

        let value = serde_json::to_value(&group).unwrap();

        assert_eq!(value, json!({"id": "g-1", "name": "Dogs", "memberCount": 12}));
    }

    #[test]
    fn deserializes_unknown_attributes_into_the_map() {
        let group: Group =
            serde_json::from_value(json!({"id": "g-2", "name": "Cats", "tags": ["a", "b"]}))
                .unwrap();

        assert_eq!(group.id, "g-2");
        assert_eq!(group.attributes.get("name"), Some(&json!("Cats")));
        assert_eq!(group.attributes.get("tags"), Some(&json!(["a", "b"])));
    }
}
