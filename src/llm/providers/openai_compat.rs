use super::LlmProvider;
use crate::constants::{TEST_MAX_TOKENS, TEST_TEMPERATURE};
use crate::errors::Error;
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

/// Provider implementation for OpenAI-compatible chat completion APIs.
///
/// Zhipu AI, Bailian, Volcano Engine and SiliconFlow all expose the same
/// `POST {base}/chat/completions` wire shape with bearer authentication, so a
/// single implementation covers the whole provider table.
#[derive(Debug)]
pub struct OpenAiCompatProvider {
    /// Bearer token passed through verbatim; never validated locally
    api_key: String,
    /// Model identifier to use (e.g. "glm-4", "qwen-plus")
    model: String,
    /// Endpoint base URL without the `/chat/completions` suffix
    base_url: String,
}

impl OpenAiCompatProvider {
    /// Creates a new provider instance
    ///
    /// # Arguments
    /// * `api_key` - Credential forwarded as a bearer token
    /// * `model` - The model identifier to use
    /// * `base_url` - Endpoint base URL
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Self {
        OpenAiCompatProvider {
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatProvider {
    /// Calls the provider's chat completions API with the fixed probe
    /// sampling parameters
    ///
    /// # Arguments
    /// * `messages` - Messages to send
    ///
    /// # Returns
    /// * `Result<String, Error>` - First choice's message content or error
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, Error> {
        let client = Client::new();
        let request_body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": TEST_TEMPERATURE,
            "max_tokens": TEST_MAX_TOKENS
        });

        let url = format!("{}/chat/completions", self.base_url);
        debug!("Sending connectivity probe to {}", url);

        let res = client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await?;
            return Err(Error::Api(format!("API error ({}): {}", status, text)));
        }

        let json_resp: serde_json::Value = res.json().await?;
        match json_resp["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok(content.to_string()),
            None => Err(Error::InvalidResponseFormat),
        }
    }
}
