//! Registration summary document
//!
//! The form is turned into bilingual [`sections::Section`]s, laid out on A4
//! pages by [`layout::layout`], and compiled to PDF by a [`DocumentRenderer`].

pub mod layout;
pub mod sections;
pub mod typst;

pub use typst::TypstRenderer;

use crate::state::FormState;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while producing the summary document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteSource(#[source] std::io::Error),
    #[error("failed to run the typst compiler '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("typst exited with status {code}: {stderr}")]
    Exit { code: i32, stderr: String },
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
    #[error("failed to save document to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A rendered registration summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    /// Date printed in the page footers, `dd/mm/yyyy`
    pub generated_on: String,
}

impl GeneratedDocument {
    /// Write the PDF into `dir`, creating it if needed, and return the full path
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, DocumentError> {
        let path = dir.join(&self.filename);
        fs::create_dir_all(dir)
            .and_then(|_| fs::write(&path, &self.pdf))
            .map_err(|source| DocumentError::Save {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

/// Turns a form into a finished document
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(&self, form: &FormState) -> Result<GeneratedDocument, DocumentError>;
}

/// `registration-form-{name}.pdf`, with the name made filesystem safe
pub fn document_filename(form: &FormState) -> String {
    let name = sanitize_filename::sanitize(form.display_name());
    let name = name.trim();
    let name = if name.is_empty() { "form" } else { name };
    format!("registration-form-{name}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filename_uses_name() {
        let form = FormState {
            name: "Selvam".to_string(),
            ..Default::default()
        };
        assert_eq!(document_filename(&form), "registration-form-Selvam.pdf");
    }

    #[test]
    fn test_filename_falls_back_to_form() {
        assert_eq!(
            document_filename(&FormState::default()),
            "registration-form-form.pdf"
        );
    }

    #[test]
    fn test_filename_strips_path_separators() {
        let form = FormState {
            name: "a/b".to_string(),
            ..Default::default()
        };
        let filename = document_filename(&form);
        assert!(!filename.contains('/'));
        assert!(filename.starts_with("registration-form-"));
    }

    #[test]
    fn test_save_to_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");
        let doc = GeneratedDocument {
            filename: "registration-form-x.pdf".to_string(),
            pdf: b"%PDF-1.7".to_vec(),
            generated_on: "01/02/2026".to_string(),
        };
        let path = doc.save_to(&target).unwrap();
        assert_eq!(path, target.join("registration-form-x.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.7");
    }
}
