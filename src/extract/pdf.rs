use async_trait::async_trait;
use tracing::{debug, error};

use super::{ExtractionError, TextExtractor};
use crate::input::SelectedFile;

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract_text(&self, file: &SelectedFile) -> Result<String, ExtractionError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| ExtractionError::Read {
                name: file.name.clone(),
                source,
            })?;

        debug!(name = %file.name, bytes = bytes.len(), "Extracting PDF text");

        // The parser can panic on hostile input; a panic surfaces as a JoinError.
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        })
        .await
        .map_err(|e| {
            error!(error = %e, "PDF parser aborted");
            ExtractionError::Unreadable(e.to_string())
        })?
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

        debug!(name = %file.name, pages = pages.len(), "PDF text extracted");
        Ok(join_pages(pages))
    }
}

/// Joins page texts, each followed by a blank line.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref().trim_end());
        text.push_str("\n\n");
    }
    text
}
