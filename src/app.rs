//! Orchestration facade: wires the session to the key store, the credit
//! ledger, and the elaborator, and enforces the gating preconditions
//! before any network call is made.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::credits::{CreditLedger, CreditsError, LOW_BALANCE_WARNING};
use crate::elaboration::{Elaborate, ElaborationError};
use crate::secrets::{KeyStore, OPENAI_KEY_NAME};
use crate::session::Session;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("nothing is selected, there is no combination to elaborate")]
    EmptyCombination,
    #[error("no API key configured for this user")]
    MissingApiKey,
    #[error(transparent)]
    Credits(#[from] CreditsError),
    #[error(transparent)]
    Elaboration(#[from] ElaborationError),
}

/// Outcome of a successful elaboration.
#[derive(Debug)]
pub struct Elaborated {
    pub combination: String,
    pub elaboration: String,
    pub credits_remaining: u32,
    pub low_balance: bool,
}

pub struct App {
    key_store: Arc<dyn KeyStore>,
    ledger: Arc<dyn CreditLedger>,
    elaborator: Arc<dyn Elaborate>,
}

impl App {
    pub fn new(
        key_store: Arc<dyn KeyStore>,
        ledger: Arc<dyn CreditLedger>,
        elaborator: Arc<dyn Elaborate>,
    ) -> Self {
        Self {
            key_store,
            ledger,
            elaborator,
        }
    }

    /// The full gated flow: require a non-empty combination, a stored
    /// API key, and a positive credit balance; debit one credit; call
    /// the elaborator.
    #[instrument(skip(self, session))]
    pub async fn elaborate(&self, user_id: &str, session: &Session) -> Result<Elaborated, AppError> {
        let combination = session.combination();
        if combination.is_empty() {
            return Err(AppError::EmptyCombination);
        }

        if !self.key_store.has_key(user_id, OPENAI_KEY_NAME).await {
            warn!(user_id, "elaboration refused, no API key stored");
            return Err(AppError::MissingApiKey);
        }

        let credits_remaining = self.ledger.debit(user_id).await?;
        info!(user_id, credits_remaining, "dispatching elaboration");
        let elaboration = self.elaborator.elaborate(&combination).await?;

        Ok(Elaborated {
            combination,
            elaboration,
            credits_remaining,
            low_balance: credits_remaining <= LOW_BALANCE_WARNING,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credits::MemoryCreditLedger;
    use crate::secrets::{MemoryKeyStore, Secret};

    struct EchoElaborator;

    #[async_trait::async_trait]
    impl Elaborate for EchoElaborator {
        async fn elaborate(&self, combination: &str) -> Result<String, ElaborationError> {
            Ok(format!("Imagine: {combination}"))
        }
    }

    struct FailingElaborator;

    #[async_trait::async_trait]
    impl Elaborate for FailingElaborator {
        async fn elaborate(&self, _combination: &str) -> Result<String, ElaborationError> {
            Err(ElaborationError::EmptyResponse)
        }
    }

    fn selected_session() -> Session {
        let mut session = Session::with_text("Color: Red, Blue\nSize: Small, Large");
        session.toggle(0, 0);
        session.toggle(1, 1);
        session
    }

    async fn app_with(
        elaborator: Arc<dyn Elaborate>,
        credits: u32,
        with_key: bool,
    ) -> (App, Arc<MemoryCreditLedger>) {
        let key_store = Arc::new(MemoryKeyStore::new());
        if with_key {
            key_store
                .set("alice", OPENAI_KEY_NAME, Secret::new("sk-test"))
                .await;
        }
        let ledger = Arc::new(MemoryCreditLedger::new());
        ledger.grant("alice", credits).await;
        (
            App::new(key_store, ledger.clone(), elaborator),
            ledger,
        )
    }

    #[tokio::test]
    async fn happy_path_debits_one_credit() {
        let (app, ledger) = app_with(Arc::new(EchoElaborator), 5, true).await;
        let result = app.elaborate("alice", &selected_session()).await.unwrap();
        assert_eq!(result.combination, "Color: Red | Size: Large");
        assert_eq!(result.elaboration, "Imagine: Color: Red | Size: Large");
        assert_eq!(result.credits_remaining, 4);
        assert!(!result.low_balance);
        assert_eq!(ledger.balance("alice").await, 4);
    }

    #[tokio::test]
    async fn low_balance_is_flagged() {
        let (app, _) = app_with(Arc::new(EchoElaborator), 3, true).await;
        let result = app.elaborate("alice", &selected_session()).await.unwrap();
        assert_eq!(result.credits_remaining, 2);
        assert!(result.low_balance);
    }

    #[tokio::test]
    async fn missing_key_is_refused_before_any_debit() {
        let (app, ledger) = app_with(Arc::new(EchoElaborator), 5, false).await;
        let err = app.elaborate("alice", &selected_session()).await.unwrap_err();
        assert!(matches!(err, AppError::MissingApiKey));
        assert_eq!(ledger.balance("alice").await, 5);
    }

    #[tokio::test]
    async fn zero_credits_is_refused() {
        let (app, _) = app_with(Arc::new(EchoElaborator), 0, true).await;
        let err = app.elaborate("alice", &selected_session()).await.unwrap_err();
        assert!(matches!(err, AppError::Credits(CreditsError::Exhausted(_))));
    }

    #[tokio::test]
    async fn empty_combination_is_refused_without_touching_collaborators() {
        let (app, ledger) = app_with(Arc::new(FailingElaborator), 5, true).await;
        let session = Session::with_text("Color: Red, Blue");
        let err = app.elaborate("alice", &session).await.unwrap_err();
        assert!(matches!(err, AppError::EmptyCombination));
        assert_eq!(ledger.balance("alice").await, 5);
    }

    #[tokio::test]
    async fn collaborator_failures_propagate() {
        let (app, _) = app_with(Arc::new(FailingElaborator), 5, true).await;
        let err = app.elaborate("alice", &selected_session()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Elaboration(ElaborationError::EmptyResponse)
        ));
    }
}
