//! Read-only catalog over the transcript archive
//!
//! # Error Handling Strategy
//!
//! Every request recomputes its view from the filesystem; nothing is cached.
//!
//! - **Missing data**: A missing archive root, project directory, or transcript
//!   yields an empty result, never an error.
//!
//! - **Untrusted identifiers**: Project folders and session ids that are not a
//!   single normal path component are treated as missing.
//!
//! - **Per-file failures**: Entries that cannot be read while listing are logged
//!   and skipped so one bad file does not hide the rest of a project.
//!
//! - **Error propagation**: Failures that leave nothing sensible to show (an
//!   unreadable archive root, an unreadable transcript) are returned as
//!   `anyhow::Error` with context for the boundary to report.

pub mod conversations;
pub mod project_discovery;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

pub use conversations::{SUBAGENT_PREFIX, TRANSCRIPT_EXTENSION, list_conversations, sort_conversations};
pub use project_discovery::discover_projects;

use crate::models::{ConversationSummary, Message, Project};
use crate::parsers::{count_transcript_messages, parse_transcript_file};
use crate::utils::is_single_component;

/// The archive of per-project transcript directories under one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    projects_dir: PathBuf,
}

impl Archive {
    /// Archive rooted directly at `projects_dir`
    pub fn new(projects_dir: impl Into<PathBuf>) -> Self {
        Self { projects_dir: projects_dir.into() }
    }

    /// Archive at `<claude_dir>/projects`
    pub fn from_claude_dir(claude_dir: &Path) -> Self {
        Self::new(claude_dir.join("projects"))
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    /// Directory of a project, if `folder` is a valid identifier
    pub fn project_dir(&self, folder: &str) -> Option<PathBuf> {
        is_single_component(folder).then(|| self.projects_dir.join(folder))
    }

    /// Transcript path of a conversation, if both identifiers are valid
    pub fn transcript_path(&self, folder: &str, file_id: &str) -> Option<PathBuf> {
        if !is_single_component(file_id) {
            return None;
        }
        self.project_dir(folder)
            .map(|dir| dir.join(format!("{}.{}", file_id, TRANSCRIPT_EXTENSION)))
    }

    /// All projects, ordered by display name
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        discover_projects(&self.projects_dir)
    }

    /// Conversations of one project, newest first
    pub fn list_conversations(&self, folder: &str) -> Result<Vec<ConversationSummary>> {
        let Some(dir) = self.project_dir(folder) else {
            debug!(folder, "rejected project identifier");
            return Ok(Vec::new());
        };

        if is_symlink(&dir) {
            warn!(path = %dir.display(), "skipping project (symlink not allowed)");
            return Ok(Vec::new());
        }

        list_conversations(&dir)
    }

    /// Display-ready messages of one conversation, in file order
    ///
    /// Sub-agent transcripts are readable here even though listings omit them.
    pub fn list_messages(&self, folder: &str, file_id: &str) -> Result<Vec<Message>> {
        match self.readable_transcript(folder, file_id) {
            Some(path) => Ok(parse_transcript_file(&path)?.messages),
            None => Ok(Vec::new()),
        }
    }

    /// Number of messages in one conversation, counted without rendering
    pub fn count_messages(&self, folder: &str, file_id: &str) -> Result<usize> {
        match self.readable_transcript(folder, file_id) {
            Some(path) => count_transcript_messages(&path),
            None => Ok(0),
        }
    }

    fn readable_transcript(&self, folder: &str, file_id: &str) -> Option<PathBuf> {
        let Some(path) = self.transcript_path(folder, file_id) else {
            debug!(folder, file_id, "rejected conversation identifier");
            return None;
        };

        // Security: never follow a symlink out of the archive
        if path.parent().is_some_and(is_symlink) || is_symlink(&path) {
            warn!(path = %path.display(), "skipping transcript (symlink not allowed)");
            return None;
        }

        Some(path)
    }
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}
