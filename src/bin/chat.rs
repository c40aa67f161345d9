//! ember-chat REPL
//!
//! Thin stdin/stdout presentation layer over the conversation core.
//! `:load <file.pdf>` extracts a document and holds its text as
//! context for the next message; `:reset` clears the history.

use ember_chat::llm::GeminiClient;
use ember_chat::{ChatConfig, ChatSession, Speaker};
use std::io::Write;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ember_chat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ChatConfig::from_env();
    let client = GeminiClient::from_config(&config)?;
    let mut session = ChatSession::new(Arc::new(client));

    // Extracted document text waiting to be prepended to the next
    // user message. Merging is a presentation policy, not a core one.
    let mut pending_context: Option<String> = None;

    println!("ember-chat (:load <file.pdf>, :reset, :quit)");
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            ":quit" | ":q" => break,
            ":reset" => {
                session.store_mut().reset();
                pending_context = None;
                println!("(history cleared)");
            }
            _ if line.starts_with(":load ") => {
                let path = line[":load ".len()..].trim();
                match std::fs::read(path) {
                    Ok(bytes) => match ember_chat::extract(bytes).await {
                        Ok(doc) => {
                            println!("(loaded {} page(s) from {path})", doc.page_count());
                            pending_context = Some(doc.combined_text());
                        }
                        Err(e) => println!("(could not ingest {path}: {e})"),
                    },
                    Err(e) => println!("(could not read {path}: {e})"),
                }
            }
            "" => {}
            _ => {
                let message = match pending_context.take() {
                    Some(context) => {
                        format!("Context from an uploaded document:\n{context}\n\n{line}")
                    }
                    None => line.to_string(),
                };
                if let Some(turn) = session.submit(message).await {
                    debug_assert_eq!(turn.speaker, Speaker::Assistant);
                    println!("{}", turn.text);
                }
            }
        }
    }

    Ok(())
}
