use crate::{
    Error, Result,
    llm::ModelInput,
    proxy::GenerationMode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PROMPT_REQUIRED: &str = "Prompt is required";

/// Raw request fields, kept untyped until the prompt has been checked.
#[derive(Debug, Default)]
pub struct GenerateRequest {
    pub prompt: Option<Value>,
    pub audio: Option<Value>,
    pub format: Option<Value>,
}

/// Recorded audio as sent by the browser. Neither field is validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPayload {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: Value,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GenerateRequest {
    /// Picks the known fields out of a decoded body. A body that is not an
    /// object yields no fields at all.
    pub fn from_body(mut body: Value) -> Self {
        let mut take = |key: &str| body.get_mut(key).map(Value::take).filter(is_truthy);
        Self {
            prompt: take("prompt"),
            audio: take("audio"),
            format: take("format"),
        }
    }

    /// Validates the request and resolves it into a model input and mode.
    /// The prompt is checked before `audio` or `format` are looked at.
    pub fn into_generation(self) -> Result<(ModelInput, GenerationMode)> {
        let prompt = match self.prompt {
            Some(Value::String(prompt)) if !prompt.is_empty() => prompt,
            _ => return Err(Error::validation(PROMPT_REQUIRED)),
        };

        let input = match self.audio {
            Some(audio) => {
                let audio: AudioPayload = serde_json::from_value(audio)?;
                ModelInput::with_audio(prompt, audio.mime_type, audio.data)
            }
            None => ModelInput::Prompt(prompt),
        };

        let format = self.format.as_ref().and_then(Value::as_str);
        Ok((input, GenerationMode::from_format(format)))
    }
}

/// `null`, `false`, `0` and `""` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl ErrorResponse {
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Validation(message) => Self {
                error: message.clone(),
                details: None,
            },
            other => Self {
                error: other.to_string(),
                details: Some(other.details()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Part;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(body: Value) -> GenerateRequest {
        GenerateRequest::from_body(body)
    }

    #[test]
    fn test_missing_and_empty_prompt_rejected() {
        for body in [
            json!({}),
            json!({"prompt": ""}),
            json!({"prompt": null, "format": "json"}),
            json!({"prompt": 0}),
            json!({"prompt": false}),
            json!({"prompt": ["a"]}),
            json!({"audio": {}}),
            json!({"format": 1}),
            json!({"prompt": "", "audio": "x"}),
            json!("just a string"),
        ] {
            let err = parse(body).into_generation().unwrap_err();
            assert_eq!(err.to_string(), PROMPT_REQUIRED);
        }
    }

    #[test]
    fn test_plain_prompt_defaults_to_text() {
        let (input, mode) = parse(json!({"prompt": "Hello"})).into_generation().unwrap();
        assert_eq!(input, ModelInput::Prompt("Hello".to_string()));
        assert_eq!(mode, GenerationMode::Text);
    }

    #[test]
    fn test_audio_builds_two_parts() {
        let (input, mode) = parse(json!({
            "prompt": "Rate my answer",
            "audio": {"data": "GkXfo0==", "mimeType": "audio/webm"},
            "format": "json"
        }))
        .into_generation()
        .unwrap();

        assert_eq!(
            input,
            ModelInput::Parts(vec![
                Part::text("Rate my answer"),
                Part::inline_data("audio/webm", "GkXfo0=="),
            ])
        );
        assert_eq!(mode, GenerationMode::Structured);
    }

    #[test]
    fn test_falsy_audio_is_ignored() {
        for audio in [json!(null), json!(""), json!(false), json!(0)] {
            let (input, _) = parse(json!({"prompt": "Hi", "audio": audio}))
                .into_generation()
                .unwrap();
            assert_eq!(input, ModelInput::Prompt("Hi".to_string()));
        }
    }

    #[test]
    fn test_malformed_audio_after_valid_prompt_is_not_validation_error() {
        let err = parse(json!({"prompt": "Hi", "audio": {"data": "AAAA"}}))
            .into_generation()
            .unwrap_err();
        assert_eq!(err.kind(), "SerializationError");
    }

    #[test]
    fn test_non_string_format_means_text() {
        let (_, mode) = parse(json!({"prompt": "Hi", "format": 1}))
            .into_generation()
            .unwrap();
        assert_eq!(mode, GenerationMode::Text);
    }

    #[test]
    fn test_validation_error_has_no_details() {
        let body = serde_json::to_value(ErrorResponse::from_error(&Error::validation(
            PROMPT_REQUIRED,
        )))
        .unwrap();
        assert_eq!(body, json!({"error": "Prompt is required"}));
    }
}
