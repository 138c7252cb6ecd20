use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

pub const PDF_MIME: &str = "application/pdf";

/// A file the user picked on the resume screen, with the metadata a browser
/// file chooser would report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_for_path(&path).to_string();
        Self {
            path,
            name,
            size,
            mime_type,
        }
    }

    /// Stat `path` and build a selection from it.
    pub async fn inspect(path: &Path) -> Result<Self> {
        let meta = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Could not open {}", path.display()))?;
        if !meta.is_file() {
            bail!("{} is not a file", path.display());
        }
        let file = Self::new(path, meta.len());
        debug!(name = %file.name, size = file.size, mime = %file.mime_type, "File selected");
        Ok(file)
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME
    }

    pub fn size_label(&self) -> String {
        const KIB: f64 = 1024.0;
        let size = self.size as f64;
        if size < KIB {
            format!("{} B", self.size)
        } else if size < KIB * KIB {
            format!("{:.1} KB", size / KIB)
        } else {
            format!("{:.1} MB", size / (KIB * KIB))
        }
    }
}

/// Extension-based MIME lookup.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => PDF_MIME,
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
