use serde::{Deserialize, Serialize};

/// Column holding an item's display name in the tabular metadata.
pub const NAME_COLUMN: &str = "Nama kuliner palembang";

/// One row of the tabular item metadata.
///
/// Only the display name is interpreted; every other column is carried
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KulinerRecord {
    #[serde(rename = "Nama kuliner palembang")]
    pub name: String,

    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl KulinerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: serde_json::Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}
