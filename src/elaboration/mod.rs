//! The AI elaboration capability: a single-method trait the app layer
//! depends on, plus an OpenAI-compatible HTTP implementation. The
//! combination core never touches this module.

pub mod client;
pub mod prompt;

pub use client::OpenAiElaborator;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElaborationError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("API returned no choices")]
    EmptyResponse,
    #[error("API returned empty content")]
    EmptyContent,
}

/// Turn a combination string into a short generated paragraph.
#[async_trait::async_trait]
pub trait Elaborate: Send + Sync {
    async fn elaborate(&self, combination: &str) -> Result<String, ElaborationError>;
}
