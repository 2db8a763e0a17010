//! Multipart webhook client

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::payload::SubmissionPayload;
use super::traits::SubmissionClientTrait;
use crate::document::GeneratedDocument;

/// Form field carrying the rendered summary PDF
pub const DOCUMENT_FIELD: &str = "registrationDocument";

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to read attachment {path}: {source}")]
    ReadAttachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("webhook responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Posts registrations to a webhook URL
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Result<Self, SubmissionError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn build_form(
        payload: SubmissionPayload,
        document: Option<GeneratedDocument>,
    ) -> Result<Form, SubmissionError> {
        let mut form = Form::new();
        for (key, value) in payload.fields {
            form = form.text(key, value);
        }
        for file in payload.files {
            form = form.part(file.name, file_part(&file.path).await?);
        }
        if let Some(document) = document {
            let part = Part::bytes(document.pdf)
                .file_name(document.filename)
                .mime_str("application/pdf")?;
            form = form.part(DOCUMENT_FIELD, part);
        }
        Ok(form)
    }
}

async fn file_part(path: &Path) -> Result<Part, SubmissionError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| SubmissionError::ReadAttachment {
            path: path.to_path_buf(),
            source,
        })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string());
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime.as_ref())?)
}

/// Keep error bodies short enough for the error dialog
fn response_excerpt(body: String) -> String {
    const LIMIT: usize = 200;
    let body = body.trim();
    if body.chars().count() <= LIMIT {
        return body.to_string();
    }
    let mut excerpt: String = body.chars().take(LIMIT).collect();
    excerpt.push_str("...");
    excerpt
}

#[async_trait]
impl SubmissionClientTrait for WebhookClient {
    async fn submit(
        &self,
        payload: SubmissionPayload,
        document: Option<GeneratedDocument>,
    ) -> Result<(), SubmissionError> {
        let field_count = payload.fields.len();
        let files: Vec<String> = payload.file_names().map(str::to_string).collect();
        let registrant = payload.get("name").unwrap_or_default().to_string();
        let form = Self::build_form(payload, document).await?;

        tracing::info!(
            url = %self.url,
            registrant = %registrant,
            fields = field_count,
            files = ?files,
            "submitting registration"
        );
        let response = self.http.post(&self.url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response_excerpt(response.text().await.unwrap_or_default());
            tracing::warn!(status = status.as_u16(), body = %body, "webhook rejected submission");
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }
        tracing::info!(status = status.as_u16(), "registration submitted");
        Ok(())
    }
}
