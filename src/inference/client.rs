use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

/// Opaque handle on the hosted model-execution service. One invocation per
/// request; failures surface directly, with no retry on this side.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn run_chat(&self, model: &str, payload: ChatPayload) -> Result<serde_json::Value>;

    async fn run_image(&self, model: &str, payload: ImagePayload) -> Result<Vec<u8>>;
}

pub struct WorkersAiClient {
    http: reqwest::Client,
    run_base: String,
    api_token: String,
}

impl WorkersAiClient {
    pub fn new(config: InferenceConfig) -> Self {
        let run_base = format!(
            "{}/accounts/{}/ai/run",
            config.api_base.trim_end_matches('/'),
            config.account_id
        );

        Self {
            http: reqwest::Client::new(),
            run_base,
            api_token: config.api_token,
        }
    }

    fn run_url(&self, model: &str) -> String {
        format!("{}/{}", self.run_base, model)
    }
}

#[async_trait]
impl InferenceClient for WorkersAiClient {
    async fn run_chat(&self, model: &str, payload: ChatPayload) -> Result<serde_json::Value> {
        debug!(model, turns = payload.messages.len(), "Running hosted chat model");

        let response = self
            .http
            .post(self.run_url(model))
            .bearer_auth(&self.api_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let envelope: RunEnvelope = serde_json::from_slice(&body)?;

        if !status.is_success() || !envelope.success {
            return Err(Error::inference(describe_failure(status, &envelope.errors)));
        }

        envelope
            .result
            .ok_or_else(|| Error::inference("Run endpoint returned an empty result"))
    }

    async fn run_image(&self, model: &str, payload: ImagePayload) -> Result<Vec<u8>> {
        debug!(model, "Running hosted image model");

        let response = self
            .http
            .post(self.run_url(model))
            .bearer_auth(&self.api_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Image models report failures as a JSON body
            let body = response.text().await.unwrap_or_default();
            return Err(Error::inference(format!(
                "Run endpoint returned {status}: {body}"
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn describe_failure(status: StatusCode, errors: &[RunMessage]) -> String {
    if errors.is_empty() {
        format!("Run endpoint returned {status} with no error detail")
    } else {
        errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
