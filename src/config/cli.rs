use crate::config::toml_config::FileConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "waitlist-relay")]
#[command(about = "Relay a waitlist sign-up to the list backend")]
pub struct CliConfig {
    /// List backend the draft is POSTed to.
    #[arg(long, default_value = "https://lists.example.com/api/waitlist")]
    pub endpoint: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub goal: String,

    /// Origin recorded on the draft.
    #[arg(long, default_value = "cli")]
    pub source: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    /// Read endpoint/source/timeout from a TOML file instead.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Deployment settings from a config file win over the CLI defaults;
    /// the sign-up fields always come from the command line.
    pub fn apply_file(&mut self, file: &FileConfig) {
        self.endpoint = file.sink.endpoint.clone();
        if let Some(timeout_seconds) = file.sink.timeout_seconds {
            self.timeout_seconds = timeout_seconds;
        }
        if let Some(source) = &file.form.source {
            self.source = source.clone();
        }
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
