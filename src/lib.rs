//! Claude History Viewer - Browse Claude Code conversation transcripts
//!
//! This library renders the local archive of Claude Code transcripts stored in
//! `~/.claude/projects/` as browsable HTML. It supports:
//!
//! - Decoding append-only JSONL transcript lines into typed records
//! - Rendering message content (text, thinking, tool use, tool results) to sanitized markup
//! - Listing projects and their conversations, newest first
//! - Composing full HTML pages and serving them over a local HTTP server
//!
//! # Example
//!
//! ```no_run
//! use claude_history_viewer::Archive;
//! use std::path::PathBuf;
//!
//! let archive = Archive::from_claude_dir(&PathBuf::from("/Users/alice/.claude"));
//! for project in archive.list_projects()? {
//!     let conversations = archive.list_conversations(&project.folder)?;
//!     println!("{}: {} conversations", project.display_name, conversations.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod models;
pub mod parsers;
pub mod render;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use catalog::Archive;
pub use models::{ConversationSummary, Message, Project, Record};
pub use parsers::{decode_line, parse_transcript, parse_transcript_file};
pub use render::{escape_html, render_content};
pub use utils::paths::{decode_project_name, format_path_with_tilde};
