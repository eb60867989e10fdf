//! Submission sink: receives the outcome of each submit attempt

use crate::state::{FormState, SubmitOutcome};
use anyhow::Result;
use async_trait::async_trait;

/// Receiver for submit attempts, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Called after every submit with the validated values and the outcome
    async fn submit(&self, state: &FormState, outcome: &SubmitOutcome) -> Result<()>;
}

/// Sink that only records validity in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, state: &FormState, outcome: &SubmitOutcome) -> Result<()> {
        match outcome {
            SubmitOutcome::Valid => {
                tracing::info!(valid = true, "Contact form is valid");
            }
            SubmitOutcome::Invalid(errors) => {
                tracing::info!(
                    valid = false,
                    failing = ?errors.fields(),
                    "Contact form failed validation"
                );
                for error in errors.to_errors() {
                    tracing::debug!("{error}");
                }
            }
        }
        // Field values only ever go out at debug
        let payload = serde_json::to_string(state)?;
        tracing::debug!(%payload, "Submitted values");
        Ok(())
    }
}
