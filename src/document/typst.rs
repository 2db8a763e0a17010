//! Typst rendering of the laid-out document.
//!
//! The layout is written as absolutely placed Typst elements into a temporary
//! directory and compiled with the `typst` CLI.

use async_trait::async_trait;
use chrono::Local;
use tempfile::tempdir;
use tokio::fs;
use tokio::process::Command;

use super::layout::{layout, DocumentLayout, Element, RuleStyle, TextStyle};
use super::sections::build_sections;
use super::{document_filename, DocumentError, DocumentRenderer, GeneratedDocument};
use crate::state::FormState;

const SOURCE_FILE: &str = "registration.typ";
const OUTPUT_FILE: &str = "registration.pdf";
const PT_TO_MM: f32 = 0.352_778;
/// Approximate ascent as a share of the font size, to turn baselines into tops
const ASCENT: f32 = 0.75;

/// Renders documents by shelling out to the Typst compiler.
#[derive(Debug, Clone)]
pub struct TypstRenderer {
    binary: String,
}

impl TypstRenderer {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Compile Typst `source` and return the PDF bytes
    async fn compile(&self, source: &str) -> Result<Vec<u8>, DocumentError> {
        let temp_dir = tempdir().map_err(DocumentError::TempDir)?;
        let typ_path = temp_dir.path().join(SOURCE_FILE);
        let output_path = temp_dir.path().join(OUTPUT_FILE);

        fs::write(&typ_path, source)
            .await
            .map_err(DocumentError::WriteSource)?;

        let output = Command::new(&self.binary)
            .arg("compile")
            .arg(&typ_path)
            .arg(&output_path)
            .current_dir(temp_dir.path())
            .output()
            .await
            .map_err(|source| DocumentError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DocumentError::Exit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        fs::read(&output_path)
            .await
            .map_err(DocumentError::ReadPdf)
    }
}

#[async_trait]
impl DocumentRenderer for TypstRenderer {
    async fn render(&self, form: &FormState) -> Result<GeneratedDocument, DocumentError> {
        let generated_on = Local::now().format("%d/%m/%Y").to_string();
        let doc = layout(&build_sections(form), &generated_on);
        let source = to_typst_source(&doc);

        tracing::debug!(pages = doc.pages.len(), "compiling registration document");
        let pdf = self.compile(&source).await?;

        Ok(GeneratedDocument {
            filename: document_filename(form),
            pdf,
            generated_on,
        })
    }
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// Typst source placing every element of `doc` at its absolute position
pub fn to_typst_source(doc: &DocumentLayout) -> String {
    let mut out = String::new();
    out.push_str("#set page(paper: \"a4\", margin: 0mm)\n");
    out.push_str("#set text(font: (\"Noto Sans\", \"Noto Sans Tamil\"), fallback: true)\n");

    for (i, page) in doc.pages.iter().enumerate() {
        if i > 0 {
            out.push_str("#pagebreak()\n");
        }
        for element in &page.elements {
            out.push_str(&place(element));
            out.push('\n');
        }
    }
    out
}

fn place(element: &Element) -> String {
    match element {
        Element::Text { x, y, style, text } => {
            let size = style.size_pt();
            let top = y - size * PT_TO_MM * ASCENT;
            let (r, g, b) = style.rgb();
            let weight = match style {
                TextStyle::Title | TextStyle::SectionTitle => ", weight: \"bold\"",
                _ => "",
            };
            format!(
                "#place(top + left, dx: {x:.2}mm, dy: {top:.2}mm, text(size: {size}pt, fill: rgb({r}, {g}, {b}){weight}, \"{}\"))",
                escape_typst_string(text)
            )
        }
        Element::Rule { x1, x2, y, style } => {
            let (width, (r, g, b)) = match style {
                RuleStyle::Heavy => (0.5, (41, 128, 185)),
                RuleStyle::Light => (0.3, (149, 165, 166)),
            };
            format!(
                "#place(top + left, dx: {x1:.2}mm, dy: {y:.2}mm, line(length: {:.2}mm, stroke: {width}mm + rgb({r}, {g}, {b})))",
                x2 - x1
            )
        }
    }
}
