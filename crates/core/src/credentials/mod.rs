//! Account creation, authentication and password changes

pub mod ports;
pub mod service;

pub use ports::{CredentialHasher, UserRepository};
pub use service::CredentialService;
