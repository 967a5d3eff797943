//! Chat command: one-shot question or interactive session

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::chat::{ChatSession, GREETING};
use crate::config::Config;
use crate::gateway::BackendGateway;

pub async fn run(
    config: &Config,
    gateway: &BackendGateway,
    question: Option<String>,
    wipe_on_exit: bool,
) -> Result<()> {
    let session_id = super::require_session_id(config)?;

    let healthy = gateway.check_health().await;
    println!("Backend Health: {}", if healthy { "OK" } else { "DOWN" });
    if !healthy {
        eprintln!("Backend seems unreachable. Check connection.");
    }

    let mut chat = ChatSession::new();

    match question {
        Some(question) => {
            let reply = chat.send(gateway, &session_id, question.trim()).await;
            println!("{reply}");
        }
        None => {
            println!("\n{GREETING}");
            println!("(type 'exit' or press Ctrl-D to quit)\n");
            interactive_loop(&mut chat, gateway, &session_id).await?;
        }
    }

    if wipe_on_exit {
        // Best-effort cleanup; never fails the command
        if let Err(err) = gateway.wipe_session(&session_id).await {
            tracing::warn!("session cleanup failed: {err}");
        }
    }

    Ok(())
}

async fn interactive_loop(
    chat: &mut ChatSession,
    gateway: &BackendGateway,
    session_id: &str,
) -> Result<()> {
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question == "exit" || question == "quit" {
            break;
        }

        let reply = chat.send(gateway, session_id, question).await;
        println!("{reply}\n");
    }

    Ok(())
}
