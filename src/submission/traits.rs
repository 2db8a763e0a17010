//! Trait abstraction for the submission client to enable mocking in tests

use async_trait::async_trait;

use super::client::SubmissionError;
use super::payload::SubmissionPayload;
use crate::document::GeneratedDocument;

/// Sends a finished registration to its destination
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    /// Submit once. Failures are returned as-is; nothing is retried.
    async fn submit(
        &self,
        payload: SubmissionPayload,
        document: Option<GeneratedDocument>,
    ) -> Result<(), SubmissionError>;
}
