//! `CredentialHasher` backed by the shared argon2 helpers

use bitacora_common::security::{hash_password, verify_password};
use bitacora_core::CredentialHasher;
use bitacora_domain::Result;

use crate::errors::InfraError;

/// Argon2id hashing with a random salt per password
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2CredentialHasher;

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<String> {
        hash_password(password).map_err(|e| InfraError::from(e).into())
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool> {
        verify_password(password, password_hash).map_err(|e| InfraError::from(e).into())
    }
}
