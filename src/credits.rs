//! Credit accounting for the elaboration feature. One elaboration costs
//! one credit; the app layer refuses the call when the balance is zero.

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;

/// Balances at or below this are surfaced to the caller as a warning.
pub const LOW_BALANCE_WARNING: u32 = 3;

#[derive(Error, Debug)]
pub enum CreditsError {
    #[error("no credits remaining for user {0}")]
    Exhausted(String),
}

#[async_trait::async_trait]
pub trait CreditLedger: Send + Sync {
    /// Unknown users have a balance of zero.
    async fn balance(&self, user_id: &str) -> u32;

    /// Take one credit, returning the remaining balance.
    async fn debit(&self, user_id: &str) -> Result<u32, CreditsError>;
}

#[derive(Default)]
pub struct MemoryCreditLedger {
    balances: RwLock<HashMap<String, u32>>,
}

impl MemoryCreditLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn grant(&self, user_id: &str, amount: u32) {
        *self
            .balances
            .write()
            .await
            .entry(user_id.to_string())
            .or_insert(0) += amount;
    }
}

#[async_trait::async_trait]
impl CreditLedger for MemoryCreditLedger {
    async fn balance(&self, user_id: &str) -> u32 {
        self.balances.read().await.get(user_id).copied().unwrap_or(0)
    }

    async fn debit(&self, user_id: &str) -> Result<u32, CreditsError> {
        let mut balances = self.balances.write().await;
        match balances.get_mut(user_id) {
            Some(balance) if *balance > 0 => {
                *balance -= 1;
                Ok(*balance)
            }
            _ => Err(CreditsError::Exhausted(user_id.to_string())),
        }
    }
}
