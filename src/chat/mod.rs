mod client;
mod session;

pub use client::ProxyClient;
pub use session::{ChatSession, TranscriptEntry, render_content};
