//! Image attachment types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata linking an uploaded file to an entry.
///
/// The bytes live in the image directory under `stored_name`; `filename` is
/// the name the client uploaded it as. `(entry_id, filename)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub entry_id: i64,
    pub filename: String,
    pub stored_name: String,
    pub created_at: DateTime<Utc>,
}
