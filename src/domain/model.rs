use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Form fields, in the fixed order validation visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FirstName,
    Email,
    Goal,
}

/// One submission attempt's payload. Built fresh per attempt, never stored.
/// Serializes to the camelCase names the list backend expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    pub first_name: String,
    pub email: String,
    #[serde(default)]
    pub goal: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

/// Outcome of one validation pass. Recomputed from scratch on every call;
/// `invalid_fields` only ever holds `FirstName` and/or `Email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub invalid_fields: Vec<FieldId>,
}

/// Acknowledgement body from the sink. Backends may answer with an empty
/// body; `message` doubles as the reason field on rejection responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionAck {
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { message: String },
}

/// Lifecycle of the workflow per page load. `Succeeded` is terminal;
/// `Failed` transitions straight back to `Idle` once the error is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// What one submit trigger amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    /// Trigger arrived while an attempt was in flight or after success.
    Ignored,
    /// Validation stopped the attempt before any dispatch.
    Invalid(ValidationResult),
    Completed(SubmissionOutcome),
}
