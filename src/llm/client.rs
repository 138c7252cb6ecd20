use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::prompts::PromptBundle;
use super::schema::SchemaDescriptor;
use super::{ModelBackend, ModelError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayRequest<'a> {
    system_prompt: &'a str,
    user_query: &'a str,
    response_schema: &'a SchemaDescriptor,
}

/// Talks to the backend relay, which holds the model credential and forwards
/// requests to the hosted model unchanged.
#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    relay_url: String,
    max_retries: u32,
}

impl RelayClient {
    pub fn new(relay_url: &str, timeout: Option<Duration>, max_retries: u32) -> Result<Self> {
        if !relay_url.starts_with("https://") && !relay_url.starts_with("http://") {
            bail!("Relay URL must use HTTP or HTTPS: {}", relay_url);
        }

        let mut builder = Client::builder().user_agent("careercoach");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            relay_url: relay_url.to_string(),
            max_retries,
        })
    }

    async fn send(&self, body: &RelayRequest<'_>) -> Result<Value, ModelError> {
        let resp = self
            .client
            .post(&self.relay_url)
            .json(body)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ModelError::Network(format!(
                "relay returned {}: {}",
                status, text
            )));
        }

        // A body cut off mid-read is a transport failure, not a bad envelope.
        let body = resp
            .bytes()
            .await
            .map_err(|e| ModelError::Network(format!("failed to read relay response: {}", e)))?;
        let envelope: Value = serde_json::from_slice(&body).map_err(|e| {
            ModelError::InvalidResponseStructure(format!("envelope is not JSON: {}", e))
        })?;

        extract_payload(&envelope)
    }
}

#[async_trait]
impl ModelBackend for RelayClient {
    async fn call_model(&self, bundle: &PromptBundle) -> Result<Value, ModelError> {
        let body = RelayRequest {
            system_prompt: &bundle.system_instruction,
            user_query: &bundle.user_query,
            response_schema: &bundle.response_schema,
        };

        let mut attempt = 0;
        loop {
            debug!(url = %self.relay_url, attempt, "Sending model request");
            match self.send(&body).await {
                Err(ModelError::Network(msg)) if attempt < self.max_retries => {
                    // 1s, 2s, 4s, ...
                    let delay = Duration::from_millis(1000 * (1 << attempt.min(6)));
                    warn!(
                        error = %msg,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Model request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

/// Pulls the model's JSON output out of a response envelope.
///
/// The text lives at `candidates[0].content.parts[0].text`; a missing or
/// empty field is a structural failure, unparsable text a malformed payload.
pub fn extract_payload(envelope: &Value) -> Result<Value, ModelError> {
    let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            ModelError::InvalidResponseStructure(
                "missing candidates[0].content.parts[0].text".to_string(),
            )
        })?;

    serde_json::from_str(text).map_err(|e| ModelError::MalformedPayload(e.to_string()))
}
