use crate::domain::model::{
    FieldId, SubmissionAck, SubmissionDraft, SubmissionOutcome, ValidationResult,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The rendered form the workflow reads from and writes to. The workflow
/// never looks up page elements itself; it goes through this port.
pub trait FormSurface: Send + Sync {
    fn field_value(&self, field: FieldId) -> String;
    fn mark_invalid(&self, field: FieldId);
    fn clear_invalid(&self, field: FieldId);
    fn focus(&self, field: FieldId);
    /// Loading presentation: submit control disabled, spinner in place of
    /// the normal label.
    fn set_loading(&self, loading: bool);
    /// Permanent disable after success; the workflow is single-use.
    fn disable_all(&self);
    fn show_success(&self);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    fn scroll_to_success(&self);
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    /// Page origin recorded on every draft.
    fn source(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// The endpoint that durably records a submission. The single suspension
/// point of the workflow; once dispatched a call runs to completion.
pub trait SubmissionSink: Send + Sync {
    fn submit(
        &self,
        draft: &SubmissionDraft,
    ) -> impl std::future::Future<Output = Result<SubmissionAck>> + Send;
}

#[async_trait]
pub trait Workflow: Send + Sync {
    /// Check the current field values, marking and focusing invalid ones.
    fn validate(&self) -> ValidationResult;
    /// Assemble the payload for one attempt from the surface and config.
    fn draft(&self) -> SubmissionDraft;
    /// Send the draft to the sink and drive the terminal UI state.
    async fn dispatch(&self, draft: SubmissionDraft) -> SubmissionOutcome;
    /// A user edit while idle clears that field's error styling and hides
    /// any visible error banner, whatever the new value is.
    fn field_edited(&self, field: FieldId);
}
