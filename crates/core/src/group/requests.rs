//! API request types for group operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::Group;

/// Request payload for creating a new group.
///
/// `name` is the only required field. Any additional attributes the client
/// sends are carried through to the stored record unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateGroupRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            extra: Map::new(),
        }
    }

    /// Set the group description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Convert into a Group with a server-assigned identifier.
    pub fn into_group(self) -> Group {
        let mut attributes = self.extra;
        // The server owns id assignment; a client-sent id must not survive.
        attributes.remove("id");
        attributes.insert("name".to_string(), Value::String(self.name));
        if let Some(description) = self.description {
            attributes.insert("description".to_string(), Value::String(description));
        }
        Group::new(attributes)
    }
}
