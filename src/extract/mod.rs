pub mod pdf;

use async_trait::async_trait;
use thiserror::Error;

use crate::input::SelectedFile;

pub use pdf::PdfExtractor;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read PDF file. It might be corrupted or protected. ({0})")]
    Unreadable(String),
}

/// Turns an uploaded document into plain text, pages separated by a blank line.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, file: &SelectedFile) -> Result<String, ExtractionError>;
}
