//! Ingest command implementations

use anyhow::{Context, Result};
use std::path::Path;

use crate::archive;
use crate::config::Config;
use crate::gateway::BackendGateway;

/// Uploads a single document, or every eligible member of a .zip bundle.
pub async fn file(config: &Config, gateway: &BackendGateway, path: &Path) -> Result<()> {
    let session_id = super::require_session_id(config)?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid file name: {}", path.display()))?
        .to_string();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    if file_name.to_lowercase().ends_with(".zip") {
        let report = archive::ingest_archive(gateway, &bytes, &session_id).await?;
        println!("{}", report.message);
        for error in &report.errors {
            eprintln!("  {error}");
        }
    } else if let Some(mime) = archive::document_mime(&file_name) {
        match gateway.ingest_file(bytes, &file_name, mime, &session_id).await {
            Ok(response) => println!("{}", response.message),
            Err(err) => anyhow::bail!(err.user_message("File ingestion failed")),
        }
    } else {
        anyhow::bail!("unsupported file type: {file_name} (expected .pdf, .txt or .zip)");
    }

    Ok(())
}

/// Ingests raw text into the session.
pub async fn text(config: &Config, gateway: &BackendGateway, text: &str) -> Result<()> {
    let session_id = super::require_session_id(config)?;

    match gateway.ingest_text(text, &session_id).await {
        Ok(response) => println!("{}", response.message),
        Err(err) => anyhow::bail!(err.user_message("Text ingestion failed")),
    }

    Ok(())
}
