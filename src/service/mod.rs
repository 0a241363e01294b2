pub mod credential_service;
pub mod hasher;

pub use credential_service::CredentialService;
pub use hasher::{BcryptHasher, PasswordHasher};
