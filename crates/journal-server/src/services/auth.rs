//! Account service: registration, login, password reset acknowledgment

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use journal_core::ports::UserStore;
use journal_core::validate::validate_email;
use journal_core::{JournalError, Result, User};
use rand::rngs::OsRng;
use std::sync::Arc;
use tracing::{info, warn};

pub struct AuthService {
    users: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Create an account. Duplicate emails are caught by the store's
    /// uniqueness constraint.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        validate_email(email)?;

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| JournalError::PasswordHash(e.to_string()))?
            .to_string();

        let user = self.users.create_user(email, &password_hash).await?;
        info!("Registered user {} ({})", user.id, user.email);

        Ok(user.into())
    }

    /// Check credentials. Nothing is issued on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        validate_email(email)?;

        if let Some(user) = self.users.get_user_by_email(email).await? {
            let parsed_hash = PasswordHash::new(&user.password_hash)
                .map_err(|e| JournalError::PasswordHash(e.to_string()))?;

            if Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
            {
                return Ok(user.into());
            }
        }

        warn!("Failed login for {}", email);
        Err(JournalError::InvalidCredentials)
    }

    /// Acknowledge a reset request for a known email. No token is created
    /// and the password is left unchanged.
    pub async fn reset_password(&self, email: &str) -> Result<()> {
        validate_email(email)?;

        match self.users.get_user_by_email(email).await? {
            Some(_) => {
                info!("Password reset requested for {}", email);
                Ok(())
            }
            None => Err(JournalError::UserNotFound(email.to_string())),
        }
    }
}
