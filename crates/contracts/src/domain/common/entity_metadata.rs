use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle timestamps the backend attaches to every record.
///
/// `deleted_at` is the soft-delete marker; listings never return deleted
/// rows, but the field is part of the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
