use crate::core::{
    ConfigProvider, FieldId, FormSurface, SubmissionDraft, SubmissionOutcome, SubmissionSink,
    ValidationResult, Workflow,
};
use crate::utils::validation;
use chrono::Utc;

/// The waitlist sign-up workflow: reads the form through an injected
/// surface, checks the fields, and relays one draft to the sink.
pub struct WaitlistWorkflow<F: FormSurface, K: SubmissionSink, C: ConfigProvider> {
    surface: F,
    sink: K,
    config: C,
}

impl<F: FormSurface, K: SubmissionSink, C: ConfigProvider> WaitlistWorkflow<F, K, C> {
    pub fn new(surface: F, sink: K, config: C) -> Self {
        Self {
            surface,
            sink,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<F: FormSurface, K: SubmissionSink, C: ConfigProvider> Workflow
    for WaitlistWorkflow<F, K, C>
{
    fn validate(&self) -> ValidationResult {
        // A fresh attempt dismisses the previous error banner before any
        // field is checked.
        self.surface.hide_error();

        // Reset previous invalid state so no stale flags carry over.
        self.surface.clear_invalid(FieldId::FirstName);
        self.surface.clear_invalid(FieldId::Email);

        let mut invalid_fields = Vec::new();

        let first_name = self.surface.field_value(FieldId::FirstName);
        if !validation::first_name_ok(&first_name) {
            self.surface.mark_invalid(FieldId::FirstName);
            self.surface.focus(FieldId::FirstName);
            invalid_fields.push(FieldId::FirstName);
        }

        let email = self.surface.field_value(FieldId::Email);
        if !validation::email_ok(&email) {
            self.surface.mark_invalid(FieldId::Email);
            // At most one focus move per pass: email only gets it when the
            // first name was fine.
            if invalid_fields.is_empty() {
                self.surface.focus(FieldId::Email);
            }
            invalid_fields.push(FieldId::Email);
        }

        if !invalid_fields.is_empty() {
            tracing::debug!("Validation failed for fields: {:?}", invalid_fields);
        }

        ValidationResult {
            valid: invalid_fields.is_empty(),
            invalid_fields,
        }
    }

    fn draft(&self) -> SubmissionDraft {
        SubmissionDraft {
            first_name: self
                .surface
                .field_value(FieldId::FirstName)
                .trim()
                .to_string(),
            email: self.surface.field_value(FieldId::Email).trim().to_string(),
            goal: self.surface.field_value(FieldId::Goal),
            timestamp: Utc::now(),
            source: self.config.source().to_string(),
        }
    }

    async fn dispatch(&self, draft: SubmissionDraft) -> SubmissionOutcome {
        self.surface.set_loading(true);
        tracing::debug!("Dispatching draft for {} to sink", draft.email);

        match self.sink.submit(&draft).await {
            Ok(ack) => {
                if let Some(message) = ack.message {
                    tracing::debug!("Sink acknowledged: {}", message);
                }
                // The permanent disable supersedes the cleared loading state.
                self.surface.set_loading(false);
                self.surface.disable_all();
                self.surface.hide_error();
                self.surface.show_success();
                self.surface.scroll_to_success();
                SubmissionOutcome::Accepted
            }
            Err(e) => {
                tracing::warn!("Submission failed: {}", e);
                let message = e.user_message();
                self.surface.show_error(&message);
                self.surface.set_loading(false);
                SubmissionOutcome::Rejected { message }
            }
        }
    }

    fn field_edited(&self, field: FieldId) {
        self.surface.clear_invalid(field);
        self.surface.hide_error();
    }
}
