//! Status command implementation

use anyhow::Result;

use crate::config::Config;
use crate::gateway::BackendGateway;

pub async fn run(config: &Config, gateway: &BackendGateway) -> Result<()> {
    let session_id = super::require_session_id(config)?;

    match gateway.session_status(&session_id).await {
        Ok(status) => {
            if status.is_empty {
                println!("Session directory empty: no candidate data found in your session.");
            } else {
                println!("Session contains ingested candidate data.");
            }
        }
        Err(err) => anyhow::bail!(err.user_message("Failed to check session status")),
    }

    Ok(())
}
