use crate::{Error, Result, inference::ChatTurn};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequestBody<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
}

#[derive(Debug, Deserialize)]
struct ChatEnvelope {
    response: ChatResult,
}

#[derive(Debug, Deserialize)]
struct ChatResult {
    response: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

/// HTTP client for the proxy's chat endpoint. Knows nothing of image mode.
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Post the full turn history and return the assistant's reply text.
    pub async fn send_chat(&self, model: &str, messages: &[ChatTurn]) -> Result<String> {
        debug!(model, turns = messages.len(), "Sending chat request");

        let response = self
            .http
            .post(&self.base_url)
            .json(&ChatRequestBody { model, messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => match body.details {
                    Some(details) => format!("{} ({})", body.error, details),
                    None => body.error,
                },
                Err(_) => format!("Proxy returned {status}"),
            };
            return Err(Error::inference(message));
        }

        let envelope: ChatEnvelope = response.json().await?;
        Ok(envelope.response.response)
    }
}
