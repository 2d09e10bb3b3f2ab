use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-managed lifecycle timestamps shared by every catalog record.
///
/// The API owns these values; the client only displays them, so both are
/// optional and absent on freshly built form payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    /// `created_at` formatted for list tables, `-` when unknown
    pub fn created_display(&self) -> String {
        self.created_at
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
