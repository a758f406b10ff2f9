//! Per-user API key storage behind a capability trait, so the app layer
//! can be tested against an in-memory stand-in.

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tokio::sync::RwLock;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key name under which a user's completion-API credential is stored.
pub const OPENAI_KEY_NAME: &str = "OPENAI_API_KEY";

/// A secret value, wiped from memory on drop and redacted in debug
/// output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("no {key_name} stored for user {user_id}")]
    Missing { user_id: String, key_name: String },
}

#[async_trait::async_trait]
pub trait KeyStore: Send + Sync {
    async fn get(&self, user_id: &str, key_name: &str) -> Result<Secret, SecretsError>;

    /// Upsert: replaces any existing value for `(user_id, key_name)`.
    async fn set(&self, user_id: &str, key_name: &str, value: Secret);

    /// Deleting an absent key is not an error.
    async fn delete(&self, user_id: &str, key_name: &str);

    async fn has_key(&self, user_id: &str, key_name: &str) -> bool {
        self.get(user_id, key_name).await.is_ok()
    }
}

#[derive(Default)]
pub struct MemoryKeyStore {
    entries: RwLock<HashMap<(String, String), Secret>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyStore for MemoryKeyStore {
    async fn get(&self, user_id: &str, key_name: &str) -> Result<Secret, SecretsError> {
        self.entries
            .read()
            .await
            .get(&(user_id.to_string(), key_name.to_string()))
            .cloned()
            .ok_or_else(|| SecretsError::Missing {
                user_id: user_id.to_string(),
                key_name: key_name.to_string(),
            })
    }

    async fn set(&self, user_id: &str, key_name: &str, value: Secret) {
        self.entries
            .write()
            .await
            .insert((user_id.to_string(), key_name.to_string()), value);
    }

    async fn delete(&self, user_id: &str, key_name: &str) {
        self.entries
            .write()
            .await
            .remove(&(user_id.to_string(), key_name.to_string()));
    }
}
