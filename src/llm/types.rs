use serde::{Deserialize, Serialize};

/// Instruction part appended when a JSON reply is required.
pub const JSON_INSTRUCTION: &str = "Respond ONLY with valid JSON.";

/// Input handed to the generative backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelInput {
    Prompt(String),
    Parts(Vec<Part>),
}

/// One element of a multi-part model input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 payload, passed through undecoded.
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

impl ModelInput {
    /// A prompt with attached audio. The text part always comes first.
    pub fn with_audio(
        prompt: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self::Parts(vec![Part::text(prompt), Part::inline_data(mime_type, data)])
    }

    /// Appends the JSON-only instruction as a trailing text part, wrapping
    /// a bare prompt into a one-part sequence first.
    pub fn with_json_instruction(self) -> Self {
        let mut parts = self.into_parts();
        parts.push(Part::text(JSON_INSTRUCTION));
        Self::Parts(parts)
    }

    pub fn into_parts(self) -> Vec<Part> {
        match self {
            Self::Prompt(text) => vec![Part::text(text)],
            Self::Parts(parts) => parts,
        }
    }
}

impl From<String> for ModelInput {
    fn from(prompt: String) -> Self {
        Self::Prompt(prompt)
    }
}

impl From<&str> for ModelInput {
    fn from(prompt: &str) -> Self {
        Self::Prompt(prompt.to_string())
    }
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<WirePart>,
}

/// Part as it appears on the wire. Reply parts we don't understand
/// (function calls, thoughts with signatures, ...) are kept opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WirePart {
    Known(Part),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u64>,
    #[serde(default)]
    pub candidates_token_count: Option<u64>,
    #[serde(default)]
    pub total_token_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl GenerateContentRequest {
    pub fn from_input(input: ModelInput) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: input.into_parts().into_iter().map(WirePart::Known).collect(),
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any text part.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|part| match part {
                WirePart::Known(Part::Text { text }) => Some(text.as_str()),
                _ => None,
            })
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}
