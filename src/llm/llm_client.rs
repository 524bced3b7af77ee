use crate::constants::{
    BAILIAN_BASE_URL, SILICONFLOW_BASE_URL, TEST_SYSTEM_PROMPT, TEST_USER_PROMPT, VOLCANO_BASE_URL,
    ZHIPU_BASE_URL,
};
use crate::errors::Error;
use crate::llm::providers::openai_compat::OpenAiCompatProvider;
use crate::llm::providers::LlmProvider;
use crate::llm::{ChatMessage, Role};
use tracing::debug;
use url::Url;

/// Generic LLM client that delegates work to a concrete provider.
#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

impl LlmClient {
    /// Creates a new LLM client for a named provider.
    ///
    /// # Arguments
    /// * `provider_id` - Provider id ("zhipuai", "bailian", "volcano" or "siliconflow")
    /// * `api_key` - Credential forwarded to the provider
    /// * `model` - Model name to use with the provider
    ///
    /// # Returns
    /// * `Result<LlmClient, Error>` - New LLM client instance or error for an
    ///   unknown provider id
    pub fn new(provider_id: &str, api_key: &str, model: &str) -> Result<Self, Error> {
        let base_url = match provider_id {
            "zhipuai" => ZHIPU_BASE_URL,
            "bailian" => BAILIAN_BASE_URL,
            "volcano" => VOLCANO_BASE_URL,
            "siliconflow" => SILICONFLOW_BASE_URL,
            _ => return Err(Error::UnknownProvider(provider_id.to_string())),
        };
        debug!("Using provider '{}' at {}", provider_id, base_url);

        Ok(LlmClient {
            provider: Box::new(OpenAiCompatProvider::new(api_key, model, base_url)),
        })
    }

    /// Creates a client for a custom OpenAI-compatible deployment.
    ///
    /// # Arguments
    /// * `base_url` - Endpoint base URL, validated before any request is made
    /// * `api_key` - Credential forwarded to the provider
    /// * `model` - Model name to use with the provider
    pub fn with_base_url(base_url: &str, api_key: &str, model: &str) -> Result<Self, Error> {
        Url::parse(base_url).map_err(|source| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(LlmClient {
            provider: Box::new(OpenAiCompatProvider::new(api_key, model, base_url)),
        })
    }

    /// Sends one connectivity probe and returns the model's reply text.
    ///
    /// The probe is a fixed two-message exchange: a system framing message and
    /// a short user greeting.
    ///
    /// # Returns
    /// * `Result<String, Error>` - First choice's content or error
    pub async fn probe(&self) -> Result<String, Error> {
        let messages = vec![
            ChatMessage::new(Role::System, TEST_SYSTEM_PROMPT),
            ChatMessage::new(Role::User, TEST_USER_PROMPT),
        ];
        self.call_llm_api(messages).await
    }

    /// Calls the LLM with the given messages and returns the raw response.
    ///
    /// # Arguments
    /// * `messages` - Messages to send
    ///
    /// # Returns
    /// * `Result<String, Error>` - LLM response text or error
    pub async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, Error> {
        self.provider.call_llm_api(messages).await
    }
}
