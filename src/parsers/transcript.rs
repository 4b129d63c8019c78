use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::{ConversationMeta, Message, Record, Role};
use crate::parsers::record::{decode_line, decode_line_bytes};
use crate::render::render_content;
use crate::utils::truncate_chars;

/// Characters of a plain-text first user message kept as the fallback summary
pub const SUMMARY_FALLBACK_CHARS: usize = 100;

/// Display-ready contents of one conversation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// Messages in file order
    pub messages: Vec<Message>,
    pub meta: ConversationMeta,
}

/// Tracks the records that decide conversation metadata.
///
/// Only the first non-empty summary and the first user turn count.
#[derive(Debug, Default)]
struct MetaCollector {
    summary: Option<String>,
    first_user_seen: bool,
    first_user_text: Option<String>,
    sort_timestamp: String,
}

impl MetaCollector {
    fn observe(&mut self, record: &Record) {
        match record {
            Record::Summary { text } if self.summary.is_none() && !text.is_empty() => {
                self.summary = Some(text.clone());
            }
            Record::UserTurn { content, timestamp } if !self.first_user_seen => {
                self.first_user_seen = true;
                self.sort_timestamp = timestamp.clone();
                self.first_user_text = content
                    .as_text()
                    .filter(|text| !text.is_empty())
                    .map(|text| truncate_chars(text, SUMMARY_FALLBACK_CHARS).to_string());
            }
            _ => {}
        }
    }

    /// Later records can no longer change the metadata
    fn is_settled(&self) -> bool {
        self.summary.is_some() && self.first_user_seen
    }

    fn finish(self) -> ConversationMeta {
        let mut meta = ConversationMeta { sort_timestamp: self.sort_timestamp, ..Default::default() };
        if let Some(summary) = self.summary.or(self.first_user_text) {
            meta.display_summary = summary;
        }
        meta
    }
}

#[derive(Debug, Default)]
struct TranscriptBuilder {
    messages: Vec<Message>,
    meta: MetaCollector,
}

impl TranscriptBuilder {
    fn push(&mut self, record: Record) {
        self.meta.observe(&record);

        match record {
            Record::UserTurn { content, timestamp } => self.messages.push(Message {
                role: Role::User,
                rendered_content: render_content(&content),
                timestamp,
                model: None,
            }),
            Record::AssistantTurn { content, timestamp, model } => self.messages.push(Message {
                role: Role::Assistant,
                rendered_content: render_content(&content),
                timestamp,
                model: Some(model),
            }),
            Record::Summary { .. } | Record::Unrecognized => {}
        }
    }

    fn finish(self) -> Transcript {
        Transcript { messages: self.messages, meta: self.meta.finish() }
    }
}

/// Parse the lines of one conversation into display-ready messages and metadata
pub fn parse_transcript<'a, I>(lines: I) -> Transcript
where
    I: IntoIterator<Item = &'a str>,
{
    let mut builder = TranscriptBuilder::default();
    for record in lines.into_iter().filter_map(decode_line) {
        builder.push(record);
    }
    builder.finish()
}

/// Collect conversation metadata only, without rendering any message
pub fn scan_metadata<'a, I>(lines: I) -> ConversationMeta
where
    I: IntoIterator<Item = &'a str>,
{
    let mut collector = MetaCollector::default();
    for record in lines.into_iter().filter_map(decode_line) {
        collector.observe(&record);
        if collector.is_settled() {
            break;
        }
    }
    collector.finish()
}

/// Parse a transcript file. A missing file yields an empty transcript.
pub fn parse_transcript_file(path: &Path) -> Result<Transcript> {
    let Some(reader) = open_transcript(path)? else {
        debug!(path = %path.display(), "transcript not found");
        return Ok(Transcript::default());
    };

    let mut builder = TranscriptBuilder::default();
    for line in reader.split(b'\n') {
        let line =
            line.with_context(|| format!("Failed to read transcript: {}", path.display()))?;
        if let Some(record) = decode_line_bytes(&line) {
            builder.push(record);
        }
    }

    let transcript = builder.finish();
    debug!(path = %path.display(), messages = transcript.messages.len(), "parsed transcript");
    Ok(transcript)
}

/// Scan a transcript file for its metadata. A missing file yields the defaults.
pub fn scan_transcript_file(path: &Path) -> Result<ConversationMeta> {
    let Some(reader) = open_transcript(path)? else {
        return Ok(ConversationMeta::default());
    };

    let mut collector = MetaCollector::default();
    for line in reader.split(b'\n') {
        let line =
            line.with_context(|| format!("Failed to read transcript: {}", path.display()))?;
        if let Some(record) = decode_line_bytes(&line) {
            collector.observe(&record);
            if collector.is_settled() {
                break;
            }
        }
    }
    Ok(collector.finish())
}

/// Count the user and assistant turns of a transcript file without rendering them.
/// A missing file counts as empty.
pub fn count_transcript_messages(path: &Path) -> Result<usize> {
    let Some(reader) = open_transcript(path)? else {
        return Ok(0);
    };

    let mut count = 0;
    for line in reader.split(b'\n') {
        let line =
            line.with_context(|| format!("Failed to read transcript: {}", path.display()))?;
        if let Some(Record::UserTurn { .. } | Record::AssistantTurn { .. }) = decode_line_bytes(&line) {
            count += 1;
        }
    }
    Ok(count)
}

/// Open a transcript for reading. Anything that is not a regular file is treated as missing.
fn open_transcript(path: &Path) -> Result<Option<BufReader<File>>> {
    match fs::metadata(path) {
        Ok(metadata) if !metadata.is_file() => {
            debug!(path = %path.display(), "transcript path is not a regular file");
            return Ok(None);
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open transcript: {}", path.display()));
        }
    }

    match File::open(path) {
        Ok(file) => Ok(Some(BufReader::new(file))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to open transcript: {}", path.display())),
    }
}
