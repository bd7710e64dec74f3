//! Security primitives and utilities
//!
//! Password hashing lives here so every credential store derives and checks
//! hashes the same way.

pub mod password;

pub use password::{hash_password, verify_password};
