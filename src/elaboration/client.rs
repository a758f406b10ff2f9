use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{prompt, Elaborate, ElaborationError};
use crate::config::Config;
use crate::secrets::Secret;

#[derive(Serialize, Debug)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    pub content: String,
}

/// Elaborator backed by an OpenAI-compatible `/chat/completions`
/// endpoint. Performs a single request per call; retry policy, if any,
/// belongs to the caller.
pub struct OpenAiElaborator {
    client: Client,
    endpoint: String,
    api_key: Secret,
    model: String,
}

impl OpenAiElaborator {
    pub fn new(config: &Config, api_key: Secret) -> Result<Self, ElaborationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.api_url.trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Elaborate for OpenAiElaborator {
    #[instrument(skip(self, combination))]
    async fn elaborate(&self, combination: &str) -> Result<String, ElaborationError> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: prompt::messages(combination),
            max_tokens: None,
            temperature: None,
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "dispatching elaboration request");
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ElaborationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        extract_elaboration(parsed)
    }
}

/// Pull the generated text out of a decoded response.
pub fn extract_elaboration(response: ChatResponse) -> Result<String, ElaborationError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ElaborationError::EmptyResponse)?;
    let content = choice.message.content;
    if content.trim().is_empty() {
        return Err(ElaborationError::EmptyContent);
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_omits_unset_sampling_fields() {
        let body = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: prompt::messages("A: x"),
            max_tokens: None,
            temperature: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert!(value.get("max_tokens").is_none());
        assert!(value.get("temperature").is_none());
        assert_eq!(value["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn extracts_the_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"A bold pairing."}},{"message":{"content":"ignored"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_elaboration(response).unwrap(), "A bold pairing.");
    }

    #[test]
    fn empty_choices_is_an_error_not_a_panic() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_elaboration(response),
            Err(ElaborationError::EmptyResponse)
        ));
    }

    #[test]
    fn blank_content_is_rejected() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"   "}}]}"#).unwrap();
        assert!(matches!(
            extract_elaboration(response),
            Err(ElaborationError::EmptyContent)
        ));
    }
}
