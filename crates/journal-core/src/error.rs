//! Error types for the journal services

use thiserror::Error;

pub type Result<T> = std::result::Result<T, JournalError>;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    #[error("Entry already exists: {0}")]
    EntryExists(i64),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
