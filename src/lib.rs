pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{console::ConsoleSurface, http::HttpSink};
pub use config::FileConfig;
pub use core::{engine::WaitlistEngine, workflow::WaitlistWorkflow};
pub use domain::model::{
    AttemptResult, FieldId, SubmissionDraft, SubmissionOutcome, ValidationResult, WorkflowState,
};
pub use utils::error::{Result, WaitlistError};
