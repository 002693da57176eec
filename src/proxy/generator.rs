use super::json::parse_json_reply;
use crate::{Error, Result, llm::{GenerativeBackend, ModelInput}};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// How the reply is returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Raw backend text.
    Text,
    /// Reply forced and parsed as JSON.
    Structured,
}

impl GenerationMode {
    /// `"json"` selects structured output, anything else plain text.
    pub fn from_format(format: Option<&str>) -> Self {
        match format {
            Some("json") => Self::Structured,
            _ => Self::Text,
        }
    }
}

/// Forwards prompts to a generative backend and normalizes the replies.
/// Holds no per-request state.
#[derive(Clone)]
pub struct GenerationProxy {
    backend: Arc<dyn GenerativeBackend>,
}

impl GenerationProxy {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    pub async fn generate_text(&self, input: ModelInput) -> Result<String> {
        self.backend.generate_content(input).await.map_err(|e| match e {
            Error::Generation(_) => e,
            other => Error::generation(other.message()),
        })
    }

    pub async fn generate_structured(&self, input: ModelInput) -> Result<Value> {
        let text = self.generate_text(input.with_json_instruction()).await?;
        debug!("Received {} bytes of JSON-mode reply", text.len());
        parse_json_reply(&text)
    }

    pub async fn generate(&self, mode: GenerationMode, input: ModelInput) -> Result<Value> {
        match mode {
            GenerationMode::Text => self.generate_text(input).await.map(Value::String),
            GenerationMode::Structured => self.generate_structured(input).await,
        }
    }
}
