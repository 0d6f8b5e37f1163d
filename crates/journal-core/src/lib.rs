//! Journal Core Library
//!
//! Domain errors, input validation, and storage ports for the journal
//! services.

// Re-export pure types from journal-types
pub use journal_types::*;

pub mod error;
pub mod ports;
pub mod validate;

pub use error::{JournalError, Result};
