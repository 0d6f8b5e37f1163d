//! Entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry held by the ephemeral store.
///
/// Ids are client-chosen and not unique; lookups take the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Persisted journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub summary: Option<String>,
}

/// Request body for creating or replacing a persisted entry.
///
/// `id` and `date` are kept as given on create. When omitted the database
/// assigns the row id and stamps the creation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub summary: Option<String>,
}
