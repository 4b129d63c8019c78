//! Data models for Claude Code conversation transcripts.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Record`] - One decoded line of a transcript file
//! - [`ContentBlock`] / [`MessageContent`] - Typed message content
//! - [`Message`] - A display-ready message with sanitized markup
//! - [`ConversationSummary`] - One entry of a project's conversation listing
//! - [`Project`] - A project directory under the archive root
//!
//! Records are decoded defensively in the `parsers` module: unknown or malformed
//! shapes map to [`Record::Unrecognized`] and [`ContentBlock::Other`] instead of errors.

pub mod conversation;
pub mod message;
pub mod project;
pub mod record;

pub use conversation::{ConversationMeta, ConversationSummary, NO_CONTENT_PLACEHOLDER};
pub use message::{Message, Role};
pub use project::Project;
pub use record::{ContentBlock, MessageContent, Record};
