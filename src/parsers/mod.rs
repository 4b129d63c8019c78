//! JSONL parsers for Claude Code transcript files
//!
//! # Error Handling Strategy
//!
//! Transcripts are append-only and may end with a partial write, so decoding
//! follows a **silent skip** approach:
//!
//! - **Individual line failures**: Blank lines are ignored. Lines that are not
//!   valid JSON, not an object, or not a known record type decode to
//!   [`Record::Unrecognized`](crate::models::Record::Unrecognized) and contribute
//!   nothing. No error ever escapes the decoder for a single line.
//!
//! - **Unexpected content shapes**: Content blocks that do not match a known shape
//!   decode to [`ContentBlock::Other`](crate::models::ContentBlock::Other) and render
//!   to nothing.
//!
//! - **File-level failures**: A missing transcript, or a path that is not a
//!   regular file, yields an empty result. Other I/O failures (permissions,
//!   read errors) are returned as `anyhow::Error` with the file path attached.

pub mod deserializers;
pub mod record;
pub mod transcript;

pub use record::{decode_line, decode_line_bytes};
pub use transcript::{
    Transcript, count_transcript_messages, parse_transcript, parse_transcript_file, scan_metadata,
    scan_transcript_file,
};
