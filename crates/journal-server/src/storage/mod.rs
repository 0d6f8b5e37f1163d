//! Storage layer
//!
//! SQLite (embedded) for entries, users and image metadata, a plain
//! directory for image bytes, and a locked `Vec` for the ephemeral service.

pub mod db;
pub mod images;
pub mod memory;

pub use db::Database;
pub use images::ImageDirectory;
pub use memory::MemoryEntryStore;
