//! Credential service - account lifecycle and password policy

use std::sync::Arc;

use bitacora_common::validation::{EmailValidator, StringValidator, Validator};
use bitacora_domain::constants::MIN_PASSWORD_LENGTH;
use bitacora_domain::{BitacoraError, NewUser, Result, StoredUser, User};
use tracing::{info, warn};

use super::ports::{CredentialHasher, UserRepository};

/// Manages user accounts and their passwords.
///
/// Every input is trimmed before use. Passwords never leave this service in
/// clear form and are never logged.
pub struct CredentialService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl CredentialService {
    /// Create a new credential service
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    /// Register a new account.
    ///
    /// Email shape and password length violations are reported as
    /// `MissingField` with a message naming the failing field.
    pub fn create_account(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let name = name.trim();
        let email = email.trim();
        let password = password.trim();

        let mut validator = Validator::new();
        validator.validate_field("email", &email, &EmailValidator::new());
        validator.validate_field("password", &password, &password_policy());
        validator.finalize().map_err(|err| BitacoraError::MissingField(err.to_string()))?;

        if self.users.find_by_email(email)?.is_some() {
            warn!(email = %email, "Account creation rejected: email already registered");
            return Err(BitacoraError::DuplicateEmail(email.to_string()));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self.users.insert(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        })?;

        info!(user_id = user.id, email = %user.email, "Account created");
        Ok(user)
    }

    /// Check an email/password pair and return the matching user
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(BitacoraError::MissingField("email and password are required".into()));
        }

        let stored = self.lookup(email)?;
        if !self.hasher.verify(password, &stored.password_hash)? {
            warn!(user_id = stored.user.id, "Authentication failed: incorrect password");
            return Err(BitacoraError::IncorrectPassword);
        }

        info!(user_id = stored.user.id, "User authenticated");
        Ok(stored.user)
    }

    /// Replace the password of the account registered under `email`.
    ///
    /// The new password must differ from the current one. No length policy
    /// applies here; that is only enforced when the account is created.
    pub fn change_password(&self, email: &str, new_password: &str) -> Result<()> {
        let email = email.trim();
        let new_password = new_password.trim();
        if email.is_empty() || new_password.is_empty() {
            return Err(BitacoraError::MissingField(
                "email and new password are required".into(),
            ));
        }

        let stored = self.lookup(email)?;
        if self.hasher.verify(new_password, &stored.password_hash)? {
            return Err(BitacoraError::InvalidValue(
                "new password must differ from the current one".into(),
            ));
        }

        let password_hash = self.hasher.hash(new_password)?;
        self.users.update_password_hash(stored.user.id, &password_hash)?;

        info!(user_id = stored.user.id, "Password changed");
        Ok(())
    }

    fn lookup(&self, email: &str) -> Result<StoredUser> {
        self.users
            .find_by_email(email)?
            .ok_or_else(|| BitacoraError::UserNotFound(email.to_string()))
    }
}

fn password_policy() -> StringValidator {
    StringValidator::new().min_length(MIN_PASSWORD_LENGTH)
}
