use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A generative-model service that turns an input into reply text.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate_content(&self, input: ModelInput) -> Result<String>;
}

/// Gemini `generateContent` over the v1beta REST API.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.unwrap_or_default(),
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        let model = self.model.trim_start_matches("models/");
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate_content(&self, input: ModelInput) -> Result<String> {
        let request = GenerateContentRequest::from_input(input);

        debug!(
            "Calling {} with {} parts",
            self.model,
            request.contents.iter().map(|c| c.parts.len()).sum::<usize>()
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(Error::generation(message));
        }

        let reply: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &reply.usage_metadata {
            debug!(
                "Token usage: prompt={:?} candidates={:?} total={:?}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        if reply.candidates.is_empty() {
            return Err(match reply.block_reason() {
                Some(reason) => Error::generation(format!("Response was blocked due to {}", reason)),
                None => Error::generation(""),
            });
        }

        reply.text().ok_or_else(|| Error::generation(""))
    }
}
