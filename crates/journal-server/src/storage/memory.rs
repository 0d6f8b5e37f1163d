//! In-memory entry store backing the ephemeral service

use journal_types::BasicEntry;
use tokio::sync::RwLock;

/// Ordered sequence of entries owned behind a lock.
///
/// Ids are not unique. Reads and updates act on the first match, deletes
/// remove every match.
pub struct MemoryEntryStore {
    entries: RwLock<Vec<BasicEntry>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Append an entry (no duplicate-id check)
    pub async fn create(&self, entry: BasicEntry) -> BasicEntry {
        self.entries.write().await.push(entry.clone());
        entry
    }

    /// All entries in insertion order
    pub async fn list(&self) -> Vec<BasicEntry> {
        self.entries.read().await.clone()
    }

    pub async fn get(&self, id: i64) -> Option<BasicEntry> {
        self.entries.read().await.iter().find(|e| e.id == id).cloned()
    }

    /// Replace the first entry with a matching id
    pub async fn update(&self, id: i64, entry: BasicEntry) -> Option<BasicEntry> {
        let mut entries = self.entries.write().await;
        let slot = entries.iter_mut().find(|e| e.id == id)?;
        *slot = entry.clone();
        Some(entry)
    }

    /// Remove every entry with a matching id, returning how many went
    pub async fn delete(&self, id: i64) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        before - entries.len()
    }
}

impl Default for MemoryEntryStore {
    fn default() -> Self {
        Self::new()
    }
}
