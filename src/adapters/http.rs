use crate::domain::model::{SubmissionAck, SubmissionDraft};
use crate::domain::ports::{ConfigProvider, SubmissionSink};
use crate::utils::error::{Result, WaitlistError};
use reqwest::Client;

/// Production sink: POSTs the draft as JSON to the configured list backend.
/// The request timeout is enforced here, on the client; a stalled backend
/// surfaces as a rejected attempt rather than a stuck `Submitting` state.
pub struct HttpSink<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpSink<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, client })
    }
}

impl<C: ConfigProvider> SubmissionSink for HttpSink<C> {
    async fn submit(&self, draft: &SubmissionDraft) -> Result<SubmissionAck> {
        tracing::debug!("POST {}", self.config.endpoint());
        let response = self
            .client
            .post(self.config.endpoint())
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Sink response status: {}", status);

        if status.is_success() {
            // Some backends acknowledge with an empty body; that still
            // counts as acceptance.
            let ack = response.json::<SubmissionAck>().await.unwrap_or_default();
            Ok(ack)
        } else {
            // A rejection body may carry a human-readable reason.
            let message = response
                .json::<SubmissionAck>()
                .await
                .ok()
                .and_then(|body| body.message);
            Err(WaitlistError::SinkRejectionError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
