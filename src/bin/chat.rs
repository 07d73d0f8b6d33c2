use anyhow::{Context, Result};
use playground_rust::chat::{ChatSession, ProxyClient, render_content};
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;

/// Text generation models known to the hosted run endpoint.
const KNOWN_MODELS: &[&str] = &[
    "@cf/meta/llama-2-7b-chat-int8",
    "@cf/meta/llama-3.2-11b-vision-instruct",
    "@hf/google/gemma-7b-it",
    "@cf/qwen/qwen1.5-7b-chat-awq",
    "@cf/qwen/qwen1.5-14b-chat-awq",
];

const DEFAULT_MODEL: &str = "@cf/qwen/qwen1.5-14b-chat-awq";
const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".parse().unwrap()),
        )
        .init();

    let backend = std::env::var("BACKEND_SERVER")
        .context("BACKEND_SERVER must point at the proxy endpoint")?;
    let model = std::env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let system_message =
        std::env::var("SYSTEM_MESSAGE").unwrap_or_else(|_| DEFAULT_SYSTEM_MESSAGE.to_string());

    let client = ProxyClient::new(backend);
    let mut session = ChatSession::new(model, system_message);

    println!("Model: {}", session.model());
    println!("Known models:");
    for model in KNOWN_MODELS {
        println!("  {model}");
    }
    println!("Commands: /model <id>, /system <message>, /stats, /quit");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(command) = line.strip_prefix('/') {
            if !handle_command(command, &mut session) {
                break;
            }
            continue;
        }

        session.push_user(line);

        let started = Instant::now();
        match await_reply(&client, &session, started).await {
            Ok(content) => {
                let elapsed = started.elapsed().as_secs_f64();
                session.record_response_time(elapsed);
                println!("assistant> {}", render_content(&content));
                println!("({elapsed:.2}s)");
                session.push_assistant(content);
            }
            Err(e) => {
                // Waiting indicator stops; the transcript keeps only the
                // user's message
                error!("Chat request failed: {}", e);
            }
        }
    }

    if let Some(average) = session.average_response_time() {
        println!("Average response time: {average:.2}s");
    }

    Ok(())
}

/// Await the proxy reply while repainting an elapsed-time counter every
/// 100 ms, as the original playground did.
async fn await_reply(
    client: &ProxyClient,
    session: &ChatSession,
    started: Instant,
) -> playground_rust::Result<String> {
    let messages = session.outbound_messages();
    let request = client.send_chat(session.model(), &messages);
    tokio::pin!(request);

    let mut ticker = tokio::time::interval(Duration::from_millis(100));

    loop {
        tokio::select! {
            result = &mut request => {
                eprint!("\r{:24}\r", "");
                return result;
            }
            _ = ticker.tick() => {
                eprint!("\rwaiting {:.1}s", started.elapsed().as_secs_f64());
                let _ = std::io::stderr().flush();
            }
        }
    }
}

/// Returns false when the session should end.
fn handle_command(command: &str, session: &mut ChatSession) -> bool {
    let (name, rest) = command.split_once(' ').unwrap_or((command, ""));

    match name {
        "quit" | "exit" => return false,
        "model" if !rest.trim().is_empty() => {
            session.set_model(rest.trim());
            println!("Model set to {}", session.model());
        }
        "system" if !rest.trim().is_empty() => {
            session.set_system_message(rest.trim());
            println!("System message updated");
        }
        "stats" => match (session.last_response_time(), session.average_response_time()) {
            (Some(last), Some(average)) => {
                println!("Last response: {last:.2}s, average: {average:.2}s");
            }
            _ => println!("No responses recorded yet"),
        },
        _ => println!("Unknown command: /{command}"),
    }

    true
}
