//! Wipe command implementation

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::gateway::BackendGateway;

pub async fn run(config: &Config, gateway: &BackendGateway, yes: bool) -> Result<()> {
    let session_id = super::require_session_id(config)?;

    if !yes && !confirm()? {
        println!("Aborted.");
        return Ok(());
    }

    match gateway.wipe_session(&session_id).await {
        Ok(response) => println!("{}", response.message),
        Err(err) => anyhow::bail!(err.user_message("Database wipe failed")),
    }

    Ok(())
}

fn confirm() -> Result<bool> {
    print!("Wipe all your session data? This cannot be undone. [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
