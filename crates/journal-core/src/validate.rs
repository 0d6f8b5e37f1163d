//! Input validation applied before anything touches storage

use crate::error::{JournalError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Reject anything that does not look like `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(JournalError::InvalidEmail(email.to_string()))
    }
}

/// Uploaded filenames must be a single path component.
pub fn validate_filename(filename: &str) -> Result<()> {
    let bad = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\', '\0']);

    if bad {
        Err(JournalError::InvalidFilename(filename.to_string()))
    } else {
        Ok(())
    }
}

/// Extension of `filename` including the dot, or an empty string.
pub fn extension_of(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &filename[idx..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+tag@mail.example.org").is_ok());

        assert!(validate_email("alice").is_err());
        assert!(validate_email("alice@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@example").is_err());
    }

    #[test]
    fn test_filename_rejects_path_components() {
        assert!(validate_filename("a.png").is_ok());
        assert!(validate_filename("holiday photo.jpeg").is_ok());

        assert!(validate_filename("").is_err());
        assert!(validate_filename("..").is_err());
        assert!(validate_filename("../etc/passwd").is_err());
        assert!(validate_filename("dir\\a.png").is_err());
        assert!(validate_filename("a\0.png").is_err());
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.png"), ".png");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".bashrc"), "");
    }
}
