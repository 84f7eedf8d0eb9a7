use thiserror::Error;

/// Shown when the sink fails without giving a reason of its own.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "We couldn't add you to the list right now. Please try again in a moment.";

#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    ConfigFileError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Sink rejected submission (status {status})")]
    SinkRejectionError {
        status: u16,
        message: Option<String>,
    },
}

impl WaitlistError {
    /// Text shown to the person filling in the form. Sink-reported reasons
    /// pass through; everything else collapses to the fallback.
    pub fn user_message(&self) -> String {
        match self {
            WaitlistError::SinkRejectionError {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WaitlistError>;
