//! Webhook submission of the completed form

mod client;
pub mod payload;
mod traits;

pub use client::{SubmissionError, WebhookClient};
pub use payload::SubmissionPayload;
pub use traits::SubmissionClientTrait;

#[cfg(test)]
pub use traits::MockSubmissionClientTrait;
