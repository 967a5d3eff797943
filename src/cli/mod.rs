//! CLI command implementations

pub mod chat;
pub mod health;
pub mod ingest;
pub mod status;
pub mod wipe;

use anyhow::Result;

use crate::config::Config;
use crate::session;

/// Resolves the session id for a backend-facing command, refusing to proceed
/// when no persistent storage context is available.
pub(crate) fn require_session_id(config: &Config) -> Result<String> {
    let session_id = session::resolve_session_id(config);
    if session_id.is_empty() {
        anyhow::bail!("no persistent session storage available; cannot contact the backend");
    }
    Ok(session_id)
}
