pub mod client;
pub mod models;
pub mod prompts;
pub mod schema;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use client::{RelayClient, extract_payload};
pub use models::*;
pub use prompts::PromptBundle;
pub use schema::SchemaDescriptor;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response structure: {0}")]
    InvalidResponseStructure(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl ModelError {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelError::Network(_) => "network",
            ModelError::InvalidResponseStructure(_) => "invalid_response_structure",
            ModelError::MalformedPayload(_) => "malformed_payload",
        }
    }
}

/// Sends a prompt bundle to the language model and hands back the JSON it
/// produced. The payload is not checked against the requested schema.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn call_model(&self, bundle: &PromptBundle) -> Result<Value, ModelError>;
}
