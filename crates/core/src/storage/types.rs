use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::group::Group;

/// The position where a bounded scan stopped, as reported by the store.
///
/// A map of key-attribute name to value. Handlers treat it as opaque: it is
/// only ever encoded for the client, decoded back, and handed to the store
/// unchanged. Only storage backends interpret its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanKey(pub BTreeMap<String, String>);

impl ScanKey {
    /// Builds the key for a table whose only key attribute is `id`.
    pub fn for_id(id: impl Into<String>) -> Self {
        let mut key = BTreeMap::new();
        key.insert("id".to_string(), id.into());
        Self(key)
    }

    /// Looks up a key attribute by name.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }
}

/// Result of one bounded scan: the items read plus the resume position,
/// `None` when the store reported no further results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Group>,
    pub last_key: Option<ScanKey>,
}
