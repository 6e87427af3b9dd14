use serde::{Deserialize, Serialize};

/// One saved entry. `added_at` is milliseconds since the Unix epoch.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: String,
    #[serde(rename = "addedAt")]
    pub added_at: u64,
}

impl CollectionItem {
    pub fn new(id: impl Into<String>, added_at: u64) -> Self {
        Self {
            id: id.into(),
            added_at,
        }
    }
}
