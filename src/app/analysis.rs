use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::extract::{ExtractionError, TextExtractor};
use crate::input::SelectedFile;
use crate::llm::{JobAnalysis, ModelBackend, ModelError, ResumeAnalysis, prompts};

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeRequest {
    pub file: SelectedFile,
    pub job_role: String,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub job_role: String,
    pub skills: String,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl AnalysisError {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Extraction(_) => "extraction",
            AnalysisError::Model(e) => e.kind(),
        }
    }
}

/// Extract the resume text, then ask the model about it.
pub async fn run_resume_analysis(
    extractor: &dyn TextExtractor,
    model: &dyn ModelBackend,
    request: &ResumeRequest,
) -> Result<ResumeAnalysis, AnalysisError> {
    let resume_text = extractor.extract_text(&request.file).await?;
    debug!(chars = resume_text.len(), "Resume text ready");

    let bundle = prompts::resume_bundle(&resume_text, &request.job_role, &request.feedback);
    let payload = model.call_model(&bundle).await?;
    Ok(decode(payload)?)
}

pub async fn run_job_analysis(
    model: &dyn ModelBackend,
    request: &JobRequest,
) -> Result<JobAnalysis, AnalysisError> {
    let bundle = prompts::job_bundle(&request.job_role, &request.skills);
    let payload = model.call_model(&bundle).await?;
    Ok(decode(payload)?)
}

/// Missing fields fall back to defaults; wrong JSON types do not.
fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ModelError> {
    serde_json::from_value(payload).map_err(|e| ModelError::MalformedPayload(e.to_string()))
}
