//! prolog-assist-chat - terminal conversation client for the relay.
//!
//! Each line typed is submitted as one query. `/clear` empties the
//! conversation and `/quit` (or end of input) exits.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use prolog_assist::adapters::relay_client::ReqwestRelayClient;
use prolog_assist::adapters::terminal::{TerminalRenderer, EMPTY_STATE, INPUT_TIP};
use prolog_assist::application::ConversationController;
use prolog_assist::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.client.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = Arc::new(ReqwestRelayClient::new(&config.client));
    println!("Prolog Debugging Assistant ({})", client.endpoint());
    println!("Ask about frontend, backend, or fullstack development errors");
    for line in EMPTY_STATE {
        println!("{}", line);
    }
    println!("{}", INPUT_TIP);
    println!("Commands: /clear, /quit");

    let mut controller =
        ConversationController::new(client).with_observer(Arc::new(TerminalRenderer::stdout()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => {
                controller.clear();
            }
            _ => {
                controller.submit(&line).await;
            }
        }
    }

    Ok(())
}
