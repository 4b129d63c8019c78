use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::models::ConversationSummary;
use crate::parsers::scan_transcript_file;

/// Extension of transcript files
pub const TRANSCRIPT_EXTENSION: &str = "jsonl";

/// File name prefix marking sub-agent transcripts, excluded from listings
pub const SUBAGENT_PREFIX: &str = "agent-";

/// Order conversations newest first.
///
/// Timestamps compare as ISO-8601 strings, so an empty timestamp sorts after
/// every non-empty one. Ties fall back to the file id, making the result
/// independent of directory listing order.
pub fn sort_conversations(conversations: &mut [ConversationSummary]) {
    conversations.sort_by(|a, b| {
        b.sort_timestamp.cmp(&a.sort_timestamp).then_with(|| a.file_id.cmp(&b.file_id))
    });
}

/// List the conversations of one project directory, newest first
///
/// Only regular `.jsonl` files count; sub-agent transcripts are excluded. A
/// missing directory yields an empty list. Files that cannot be read are logged
/// and skipped.
pub fn list_conversations(project_dir: &Path) -> Result<Vec<ConversationSummary>> {
    if !project_dir.is_dir() {
        debug!(path = %project_dir.display(), "project directory not found");
        return Ok(Vec::new());
    }

    let mut conversations = Vec::new();
    let walker = WalkDir::new(project_dir).min_depth(1).max_depth(1).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| {
                    format!("Failed to read project directory: {}", project_dir.display())
                });
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable project entry");
                continue;
            }
        };

        // Security: skip symlinked transcripts
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(TRANSCRIPT_EXTENSION) {
            continue;
        }

        let file = entry.file_name().to_string_lossy().to_string();
        if file.starts_with(SUBAGENT_PREFIX) {
            continue;
        }

        let file_id = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => continue,
        };

        match scan_transcript_file(path) {
            Ok(meta) => conversations.push(ConversationSummary::new(file, file_id, meta)),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable transcript"),
        }
    }

    sort_conversations(&mut conversations);
    debug!(path = %project_dir.display(), count = conversations.len(), "listed conversations");

    Ok(conversations)
}
