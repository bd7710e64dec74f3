//! Port interfaces for user credentials

use bitacora_domain::{NewUser, Result, StoredUser, User};

/// User persistence and retrieval
pub trait UserRepository: Send + Sync {
    /// Look a user up by exact (already trimmed) email
    fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>>;

    /// Insert a new user.
    ///
    /// Implementations backed by a UNIQUE email column report a collision as
    /// `BitacoraError::DuplicateEmail`.
    fn insert(&self, user: NewUser) -> Result<User>;

    /// Replace the stored password hash of `user_id`
    fn update_password_hash(&self, user_id: i64, password_hash: &str) -> Result<()>;
}

/// One-way password hashing
pub trait CredentialHasher: Send + Sync {
    /// Derive a salted hash suitable for storage
    fn hash(&self, password: &str) -> Result<String>;

    /// Check `password` against a stored hash
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool>;
}
