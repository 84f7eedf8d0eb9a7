use crate::core::{AttemptResult, FieldId, SubmissionOutcome, Workflow, WorkflowState};
use tokio::sync::Mutex;

/// Drives one submit trigger from user intent to a terminal UI state and
/// owns the workflow's state machine:
///
/// `Idle -> Validating -> Submitting -> Succeeded` (terminal), or
/// `Submitting -> Failed -> Idle` when the sink rejects.
///
/// A trigger that arrives while an attempt is in flight bounces off the
/// `Submitting` check; the sink is never dispatched re-entrantly.
pub struct WaitlistEngine<W: Workflow> {
    workflow: W,
    state: Mutex<WorkflowState>,
}

impl<W: Workflow> WaitlistEngine<W> {
    pub fn new(workflow: W) -> Self {
        Self {
            workflow,
            state: Mutex::new(WorkflowState::Idle),
        }
    }

    pub async fn state(&self) -> WorkflowState {
        *self.state.lock().await
    }

    pub async fn handle_submit(&self) -> AttemptResult {
        {
            let mut state = self.state.lock().await;
            match *state {
                WorkflowState::Submitting => {
                    tracing::debug!("Submit ignored: attempt already in flight");
                    return AttemptResult::Ignored;
                }
                WorkflowState::Succeeded => {
                    tracing::debug!("Submit ignored: sign-up already completed");
                    return AttemptResult::Ignored;
                }
                _ => {}
            }

            Self::transition(&mut state, WorkflowState::Validating);
            let result = self.workflow.validate();
            if !result.valid {
                Self::transition(&mut state, WorkflowState::Idle);
                return AttemptResult::Invalid(result);
            }
            Self::transition(&mut state, WorkflowState::Submitting);
        }

        // Lock released: unrelated events keep flowing while the sink call
        // is in flight. Re-entrant triggers hit the Submitting arm above.
        let draft = self.workflow.draft();
        let outcome = self.workflow.dispatch(draft).await;

        let mut state = self.state.lock().await;
        match &outcome {
            SubmissionOutcome::Accepted => {
                Self::transition(&mut state, WorkflowState::Succeeded);
            }
            SubmissionOutcome::Rejected { .. } => {
                // Failed is transient: the error is already on screen and
                // the form is interactive again for a retry.
                Self::transition(&mut state, WorkflowState::Failed);
                Self::transition(&mut state, WorkflowState::Idle);
            }
        }
        AttemptResult::Completed(outcome)
    }

    /// Edits only reach the workflow while the form is idle; during an
    /// in-flight attempt the controls are disabled, and after success the
    /// form is inert.
    pub async fn handle_edit(&self, field: FieldId) {
        let state = self.state.lock().await;
        if matches!(*state, WorkflowState::Idle) {
            self.workflow.field_edited(field);
        }
    }

    fn transition(state: &mut WorkflowState, next: WorkflowState) {
        tracing::debug!("Workflow state: {:?} -> {:?}", *state, next);
        *state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SubmissionDraft, ValidationResult};
    use crate::utils::error::FALLBACK_ERROR_MESSAGE;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::Notify;

    struct MockWorkflow {
        valid: bool,
        accept: bool,
        gate: Option<Arc<Notify>>,
        dispatches: Arc<Mutex<usize>>,
        edits: Arc<Mutex<Vec<FieldId>>>,
    }

    impl MockWorkflow {
        fn new(valid: bool, accept: bool) -> Self {
            Self {
                valid,
                accept,
                gate: None,
                dispatches: Arc::new(Mutex::new(0)),
                edits: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn gated(valid: bool, accept: bool, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new(valid, accept)
            }
        }

        fn dispatch_count(&self) -> usize {
            *self.dispatches.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl Workflow for MockWorkflow {
        fn validate(&self) -> ValidationResult {
            if self.valid {
                ValidationResult {
                    valid: true,
                    invalid_fields: vec![],
                }
            } else {
                ValidationResult {
                    valid: false,
                    invalid_fields: vec![FieldId::FirstName],
                }
            }
        }

        fn draft(&self) -> SubmissionDraft {
            SubmissionDraft {
                first_name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                goal: String::new(),
                timestamp: Utc::now(),
                source: "test.invalid".to_string(),
            }
        }

        async fn dispatch(&self, _draft: SubmissionDraft) -> SubmissionOutcome {
            *self.dispatches.lock().unwrap() += 1;
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.accept {
                SubmissionOutcome::Accepted
            } else {
                SubmissionOutcome::Rejected {
                    message: FALLBACK_ERROR_MESSAGE.to_string(),
                }
            }
        }

        fn field_edited(&self, field: FieldId) {
            self.edits.lock().unwrap().push(field);
        }
    }

    async fn wait_for_state<W: Workflow>(engine: &WaitlistEngine<W>, wanted: WorkflowState) {
        for _ in 0..500 {
            if engine.state().await == wanted {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("engine never reached {:?}", wanted);
    }

    #[tokio::test]
    async fn test_invalid_input_returns_to_idle_without_dispatch() {
        let dispatches = Arc::new(Mutex::new(0));
        let workflow = MockWorkflow {
            dispatches: dispatches.clone(),
            ..MockWorkflow::new(false, true)
        };
        let engine = WaitlistEngine::new(workflow);

        let result = engine.handle_submit().await;

        match result {
            AttemptResult::Invalid(validation) => {
                assert_eq!(validation.invalid_fields, vec![FieldId::FirstName]);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert_eq!(engine.state().await, WorkflowState::Idle);
        assert_eq!(*dispatches.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_successful_attempt_is_terminal() {
        let engine = WaitlistEngine::new(MockWorkflow::new(true, true));

        let result = engine.handle_submit().await;

        assert_eq!(
            result,
            AttemptResult::Completed(SubmissionOutcome::Accepted)
        );
        assert_eq!(engine.state().await, WorkflowState::Succeeded);

        // Single-use per page load: later triggers are ignored.
        assert_eq!(engine.handle_submit().await, AttemptResult::Ignored);
        assert_eq!(engine.state().await, WorkflowState::Succeeded);
    }

    #[tokio::test]
    async fn test_rejected_attempt_returns_to_idle_and_is_retryable() {
        let workflow = MockWorkflow::new(true, false);
        let dispatches = workflow.dispatches.clone();
        let engine = WaitlistEngine::new(workflow);

        let result = engine.handle_submit().await;

        assert_eq!(
            result,
            AttemptResult::Completed(SubmissionOutcome::Rejected {
                message: FALLBACK_ERROR_MESSAGE.to_string()
            })
        );
        assert_eq!(engine.state().await, WorkflowState::Idle);

        // Failure is not terminal: the same engine accepts another attempt.
        engine.handle_submit().await;
        assert_eq!(*dispatches.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_no_double_dispatch_while_in_flight() {
        let gate = Arc::new(Notify::new());
        let workflow = MockWorkflow::gated(true, true, gate.clone());
        let dispatches = workflow.dispatches.clone();
        let engine = Arc::new(WaitlistEngine::new(workflow));

        let first = {
            let engine = engine.clone();
            tokio::spawn(async move { engine.handle_submit().await })
        };
        wait_for_state(&engine, WorkflowState::Submitting).await;

        // Rapid re-triggers while the sink call is pending all bounce.
        assert_eq!(engine.handle_submit().await, AttemptResult::Ignored);
        assert_eq!(engine.handle_submit().await, AttemptResult::Ignored);

        gate.notify_one();
        let result = first.await.unwrap();

        assert_eq!(
            result,
            AttemptResult::Completed(SubmissionOutcome::Accepted)
        );
        assert_eq!(*dispatches.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_edit_reaches_workflow_only_while_idle() {
        let workflow = MockWorkflow::new(true, true);
        let edits = workflow.edits.clone();
        let engine = WaitlistEngine::new(workflow);

        engine.handle_edit(FieldId::Email).await;
        assert_eq!(*edits.lock().unwrap(), vec![FieldId::Email]);

        engine.handle_submit().await;
        assert_eq!(engine.state().await, WorkflowState::Succeeded);

        engine.handle_edit(FieldId::FirstName).await;
        assert_eq!(*edits.lock().unwrap(), vec![FieldId::Email]);
    }
}
