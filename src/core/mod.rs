pub mod engine;
pub mod workflow;

pub use crate::domain::model::{
    AttemptResult, FieldId, SubmissionAck, SubmissionDraft, SubmissionOutcome, ValidationResult,
    WorkflowState,
};
pub use crate::domain::ports::{ConfigProvider, FormSurface, SubmissionSink, Workflow};
pub use crate::utils::error::Result;
