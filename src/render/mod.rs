//! Markup rendering for transcripts and pages.
//!
//! [`content`] turns message content into sanitized fragments; [`pages`] wraps
//! those fragments, and the catalog listings, into complete HTML documents.
//! Every string that comes from a transcript or the filesystem is escaped exactly
//! once, at the point where it is embedded; rendered fragments are embedded as-is.

pub mod content;
pub mod pages;
pub mod styles;
pub mod timestamps;

pub use content::{escape_html, render_block, render_content};
pub use pages::{render_conversation, render_home, render_project};
