use crate::db::sqlite::UsersStorage;
use crate::error::PassgateError;
use crate::service::hasher::PasswordHasher;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registration and authentication over an injected store and hasher.
#[derive(Clone)]
pub struct CredentialService {
    storage: UsersStorage,
    hasher: Arc<dyn PasswordHasher>,
}

impl CredentialService {
    pub fn new(storage: UsersStorage, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { storage, hasher }
    }

    pub fn storage(&self) -> &UsersStorage {
        &self.storage
    }

    /// Hash `password` and store it under `username`.
    ///
    /// The hash is computed first; if that fails nothing is written.
    /// A username that already exists yields `UsernameTaken`.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), PassgateError> {
        let hasher = self.hasher.clone();
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

        self.storage.insert(username, &hash).await
    }

    /// Check `password` against the stored hash for `username`.
    ///
    /// Unknown users, wrong passwords and unreadable stored hashes all yield `Unauthorized`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<(), PassgateError> {
        let hash = match self.storage.fetch_hash(username).await {
            Ok(hash) => hash,
            Err(PassgateError::UserNotFound) => {
                debug!(username, "signin for unknown user");
                return Err(PassgateError::Unauthorized);
            }
            Err(e) => return Err(e),
        };

        let hasher = self.hasher.clone();
        let password = password.to_owned();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await?;

        match verified {
            Ok(true) => Ok(()),
            Ok(false) => Err(PassgateError::Unauthorized),
            Err(e) => {
                warn!(username, error = %e, "stored password hash could not be verified");
                Err(PassgateError::Unauthorized)
            }
        }
    }
}
