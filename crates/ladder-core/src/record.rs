use crate::level::Level;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp column format used by the existing sheet.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// ProgressRecord
// ---------------------------------------------------------------------------

/// One append-only log row. Written once, never updated or deleted —
/// corrections are new rows with a later `updated_at`.
///
/// Field names match the sheet columns so existing data stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub nurse_name: String,
    pub category: String,
    pub item_id: String,
    pub item_title: String,
    pub level: Level,
    #[serde(default)]
    pub comment: String,
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

impl ProgressRecord {
    /// Build a record stamped with the current wall-clock time.
    pub fn new(
        nurse_name: impl Into<String>,
        category: impl Into<String>,
        item_id: impl Into<String>,
        item_title: impl Into<String>,
        level: Level,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            nurse_name: nurse_name.into(),
            category: category.into(),
            item_id: item_id.into(),
            item_title: item_title.into(),
            level,
            comment: comment.into(),
            updated_at: chrono::Local::now().naive_local(),
        }
    }
}

// ---------------------------------------------------------------------------
// Timestamp (de)serialization
// ---------------------------------------------------------------------------

/// Serde adapter for the sheet's `YYYY-MM-DD HH:MM:SS` timestamp column.
pub mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
