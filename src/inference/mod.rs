mod client;
mod types;

pub use client::{InferenceClient, WorkersAiClient};
pub use types::{ChatPayload, ChatTurn, ImagePayload, RunEnvelope, RunMessage};
