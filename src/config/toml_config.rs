use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_SOURCE: &str = "localhost";

/// Deployment configuration for embedding the workflow behind a config
/// file rather than command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub sink: SinkConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    pub source: Option<String>,
}

impl FileConfig {
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&raw)?;
        Ok(config)
    }
}

impl ConfigProvider for FileConfig {
    fn endpoint(&self) -> &str {
        &self.sink.endpoint
    }

    fn source(&self) -> &str {
        self.form.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.sink
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_url("sink.endpoint", &self.sink.endpoint)?;
        if let Some(timeout_seconds) = self.sink.timeout_seconds {
            validate_range("sink.timeout_seconds", timeout_seconds, 1, 300)?;
        }
        if let Some(source) = &self.form.source {
            validate_non_empty_string("form.source", source)?;
        }
        Ok(())
    }
}
