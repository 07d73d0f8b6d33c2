use crate::inference::ChatTurn;
use chrono::{DateTime, Utc};

/// One recorded turn in the local transcript.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub turn: ChatTurn,
    pub at: DateTime<Utc>,
}

impl TranscriptEntry {
    fn new(turn: ChatTurn) -> Self {
        Self {
            turn,
            at: Utc::now(),
        }
    }
}

/// Client-side conversation state. The proxy keeps nothing between calls,
/// so the full history travels with every request.
#[derive(Debug)]
pub struct ChatSession {
    model: String,
    system_message: String,
    transcript: Vec<TranscriptEntry>,
    response_times: Vec<f64>,
}

impl ChatSession {
    pub fn new(model: impl Into<String>, system_message: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_message: system_message.into(),
            transcript: Vec::new(),
            response_times: Vec::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn system_message(&self) -> &str {
        &self.system_message
    }

    pub fn set_system_message(&mut self, message: impl Into<String>) {
        self.system_message = message.into();
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.transcript
            .push(TranscriptEntry::new(ChatTurn::user(content)));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.transcript
            .push(TranscriptEntry::new(ChatTurn::assistant(content)));
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Full outbound history: the system turn first, then every recorded
    /// turn oldest first.
    pub fn outbound_messages(&self) -> Vec<ChatTurn> {
        let mut messages = Vec::with_capacity(self.transcript.len() + 1);
        messages.push(ChatTurn::system(self.system_message.clone()));
        messages.extend(self.transcript.iter().map(|entry| entry.turn.clone()));
        messages
    }

    pub fn record_response_time(&mut self, seconds: f64) {
        self.response_times.push(seconds);
    }

    pub fn last_response_time(&self) -> Option<f64> {
        self.response_times.last().copied()
    }

    pub fn average_response_time(&self) -> Option<f64> {
        if self.response_times.is_empty() {
            return None;
        }
        Some(self.response_times.iter().sum::<f64>() / self.response_times.len() as f64)
    }
}

/// Re-indent a reply so multi-line content stays aligned under the
/// `assistant> ` label.
pub fn render_content(content: &str) -> String {
    content.trim_end().replace('\n', "\n           ")
}
