use serde::{Deserialize, Serialize};

/// One message in a conversation history, oldest first when assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Wire payload for chat models: the history wrapped in a single field.
#[derive(Debug, Clone, Serialize)]
pub struct ChatPayload {
    pub messages: Vec<ChatTurn>,
}

/// Wire payload for image models.
#[derive(Debug, Clone, Serialize)]
pub struct ImagePayload {
    pub prompt: String,
}

/// Envelope the run endpoint wraps around JSON model output.
#[derive(Debug, Deserialize)]
pub struct RunEnvelope {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<RunMessage>,
}

#[derive(Debug, Deserialize)]
pub struct RunMessage {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}
