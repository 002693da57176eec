use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message used when the backend fails without saying why.
pub const GENERIC_GENERATION_FAILURE: &str = "Failed to generate content from AI.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or missing request input. Displays the bare message.
    #[error("{0}")]
    Validation(String),

    /// The backend call failed or produced nothing usable. Displays the bare message.
    #[error("{0}")]
    Generation(String),

    /// The backend reply was not JSON after fence stripping. `raw` is kept
    /// for diagnostics and never shown to the caller.
    #[error("AI response was not valid JSON")]
    JsonParse { raw: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Builds a generation error, falling back to the generic message when
    /// `msg` is blank.
    pub fn generation(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.trim().is_empty() {
            Self::Generation(GENERIC_GENERATION_FAILURE.to_string())
        } else {
            Self::Generation(msg)
        }
    }

    /// Stable name of the error category, used in response details.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "ConfigError",
            Self::Validation(_) => "ValidationError",
            Self::Generation(_) => "GenerationError",
            Self::JsonParse { .. } => "JSONParseError",
            Self::Serialization(_) => "SerializationError",
            Self::Yaml(_) => "YamlError",
            Self::Io(_) => "IoError",
            Self::Network(_) => "NetworkError",
            Self::AddrParse(_) => "AddrParseError",
        }
    }

    /// The underlying message without this crate's category prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Validation(msg) | Self::Generation(msg) => msg.clone(),
            Self::JsonParse { .. } => self.to_string(),
            Self::Serialization(e) => e.to_string(),
            Self::Yaml(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
            Self::Network(e) => e.to_string(),
            Self::AddrParse(e) => e.to_string(),
        }
    }

    /// `"<kind>: <message>"`, the stringified form reported to clients.
    pub fn details(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}
