//! Export boundary — turns a finished render tree into a downloadable artifact.
//!
//! The exporter only trusts the node carrying `data-resume-root`; the tree is
//! always a complete snapshot, so nothing here reaches back into a session.

pub mod handlers;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::render::html::{escape_text, to_html};
use crate::render::RenderTree;

pub const DEFAULT_FILENAME: &str = "my-resume";
const DEFAULT_TITLE: &str = "Resume";

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("render tree has no node marked data-resume-root")]
    RootNotFound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Html,
    Doc,
    /// Print-ready HTML; rasterisation happens in the client's print pipeline.
    #[default]
    Pdf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

impl PaperSize {
    fn css(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::Letter => "letter",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportOptions {
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub paper_size: PaperSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

pub fn export(tree: &RenderTree, options: &ExportOptions) -> Result<ExportArtifact, ExportError> {
    let root = tree.marked_root().ok_or(ExportError::RootNotFound)?;
    let title = tree.title().unwrap_or(DEFAULT_TITLE);

    let (extension, content_type) = match options.format {
        ExportFormat::Html | ExportFormat::Pdf => ("html", "text/html; charset=utf-8"),
        ExportFormat::Doc => ("doc", "application/msword"),
    };
    let filename = format!("{}.{extension}", file_stem(options.filename.as_deref()));

    let mut head = format!(
        "<meta charset=\"utf-8\"><title>{}</title>",
        escape_text(title)
    );
    head.push_str(&format!(
        "<style>@page {{ size: {}; margin: 0; }} body {{ margin: 0; }}</style>",
        options.paper_size.css()
    ));
    if options.format == ExportFormat::Doc {
        head.push_str("<meta name=\"ProgId\" content=\"Word.Document\">");
    }

    let body = format!(
        "<!DOCTYPE html><html><head>{head}</head><body>{}</body></html>",
        to_html(root)
    );

    info!(
        filename = %filename,
        format = ?options.format,
        paper = ?options.paper_size,
        bytes = body.len(),
        "Exported resume"
    );

    Ok(ExportArtifact {
        filename,
        content_type,
        body,
    })
}

/// Slugified filename stem, falling back to [`DEFAULT_FILENAME`].
fn file_stem(requested: Option<&str>) -> String {
    let stem = requested.map(slug::slugify).unwrap_or_default();
    if stem.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        stem
    }
}
