//! ZIP archive ingest workflow
//!
//! Walks a candidate-document bundle and ingests each eligible member
//! through the backend, one entry at a time. Sequential on purpose:
//! failures stay attributed to the entry that caused them, and the backend
//! sees at most one upload per session at a time.

use std::io::{Cursor, Read};
use zip::ZipArchive;

use crate::error::ArchiveError;
use crate::gateway::BackendGateway;

/// Aggregated result of one archive ingest run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub success_count: usize,
    pub fail_count: usize,
    pub message: String,
    pub errors: Vec<String>,
}

/// MIME type for an eligible document name, `None` for anything that is not
/// a candidate document (matched case-insensitively on the extension).
pub fn document_mime(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    if lower.ends_with(".pdf") {
        Some("application/pdf")
    } else if lower.ends_with(".txt") {
        Some("text/plain")
    } else {
        None
    }
}

/// Basename of an archive entry path; nested entries upload under their
/// file name, while error attribution keeps the full path.
fn entry_file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Ingests every eligible entry of a ZIP archive into the given session.
///
/// Directory entries and non-document entries are skipped silently. A
/// per-entry failure is recorded and the walk continues; the whole run only
/// fails when the archive cannot be decoded or when no entry succeeded and
/// at least one failed. An archive with zero eligible entries is a trivial
/// success ("Processed 0 files successfully.").
pub async fn ingest_archive(
    gateway: &BackendGateway,
    archive_bytes: &[u8],
    session_id: &str,
) -> Result<IngestReport, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;

    let mut success_count = 0usize;
    let mut fail_count = 0usize;
    let mut errors: Vec<String> = Vec::new();

    for index in 0..archive.len() {
        // Name and bytes are pulled out first so the borrow on the archive
        // ends before the upload await below.
        let (entry_path, mime, bytes) = {
            let mut entry = match archive.by_index(index) {
                Ok(entry) => entry,
                Err(err) => {
                    fail_count += 1;
                    errors.push(format!("entry #{index}: {err}"));
                    continue;
                }
            };

            if entry.is_dir() {
                continue;
            }

            let entry_path = entry.name().to_string();
            let Some(mime) = document_mime(&entry_path) else {
                continue;
            };

            let mut bytes = Vec::with_capacity(entry.size() as usize);
            match entry.read_to_end(&mut bytes) {
                Ok(_) => (entry_path, mime, bytes),
                Err(err) => {
                    fail_count += 1;
                    errors.push(format!("{entry_path}: {err}"));
                    continue;
                }
            }
        };

        match gateway
            .ingest_file(bytes, entry_file_name(&entry_path), mime, session_id)
            .await
        {
            Ok(_) => success_count += 1,
            Err(err) => {
                tracing::warn!("failed to ingest {entry_path}: {err}");
                fail_count += 1;
                let detail = match err.detail() {
                    Some(detail) => detail.to_string(),
                    None => err.to_string(),
                };
                errors.push(format!("{entry_path}: {detail}"));
            }
        }
    }

    if success_count == 0 && fail_count > 0 {
        return Err(ArchiveError::AllEntriesFailed {
            details: errors.join(", "),
        });
    }

    let mut message = format!("Processed {success_count} files successfully.");
    if fail_count > 0 {
        message.push_str(&format!(" Failed {fail_count} files."));
    }

    Ok(IngestReport {
        success_count,
        fail_count,
        message,
        errors,
    })
}
