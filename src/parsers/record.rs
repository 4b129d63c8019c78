use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::models::{ContentBlock, MessageContent, Record};
use crate::parsers::deserializers::{lenient_string, present_value, string_or_none};

const RECORD_TYPE_SUMMARY: &str = "summary";
const RECORD_TYPE_USER: &str = "user";
const RECORD_TYPE_ASSISTANT: &str = "assistant";

const BLOCK_TYPE_TEXT: &str = "text";
const BLOCK_TYPE_THINKING: &str = "thinking";
const BLOCK_TYPE_TOOL_USE: &str = "tool_use";
const BLOCK_TYPE_TOOL_RESULT: &str = "tool_result";

/// Tool name shown when a `tool_use` block has none
pub const DEFAULT_TOOL_NAME: &str = "Unknown Tool";

#[derive(Debug, Deserialize)]
struct SummaryLine {
    #[serde(default, deserialize_with = "lenient_string")]
    summary: String,
}

#[derive(Debug, Deserialize)]
struct TurnLine {
    #[serde(default)]
    message: Option<TurnMessage>,
    #[serde(default, deserialize_with = "lenient_string")]
    timestamp: String,
}

#[derive(Debug, Default, Deserialize)]
struct TurnMessage {
    #[serde(default, deserialize_with = "present_value")]
    content: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    model: String,
}

#[derive(Debug, Deserialize)]
struct TextBlock {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ThinkingBlock {
    #[serde(default)]
    thinking: String,
}

#[derive(Debug, Deserialize)]
struct ToolUseBlock {
    #[serde(default = "default_tool_name")]
    name: String,
    #[serde(default = "empty_input")]
    input: Value,
}

#[derive(Debug, Deserialize)]
struct ToolResultBlock {
    #[serde(default, deserialize_with = "string_or_none")]
    content: Option<String>,
}

fn default_tool_name() -> String {
    DEFAULT_TOOL_NAME.to_string()
}

fn empty_input() -> Value {
    Value::Object(Map::new())
}

#[derive(Debug, Clone, Copy)]
enum RecordKind {
    Summary,
    User,
    Assistant,
}

/// Decode one transcript line.
///
/// Returns `None` for blank lines, which are skipped entirely. Every other line
/// yields a record; anything that is not valid JSON, not an object, or not one
/// of the known record types becomes [`Record::Unrecognized`].
pub fn decode_line(line: &str) -> Option<Record> {
    if line.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(line) {
        Ok(value) => Some(decode_value(value)),
        Err(e) => {
            trace!(error = %e, "skipping malformed transcript line");
            Some(Record::Unrecognized)
        }
    }
}

/// Decode one raw line as read from disk. Invalid UTF-8 is unrecognized.
pub fn decode_line_bytes(line: &[u8]) -> Option<Record> {
    match std::str::from_utf8(line) {
        Ok(line) => decode_line(line),
        Err(e) => {
            trace!(error = %e, "skipping transcript line with invalid UTF-8");
            Some(Record::Unrecognized)
        }
    }
}

/// Decode an already-parsed JSON value into a record
pub fn decode_value(value: Value) -> Record {
    let kind = match value.get("type").and_then(Value::as_str) {
        Some(RECORD_TYPE_SUMMARY) => RecordKind::Summary,
        Some(RECORD_TYPE_USER) => RecordKind::User,
        Some(RECORD_TYPE_ASSISTANT) => RecordKind::Assistant,
        _ => return Record::Unrecognized,
    };

    // `get` above returns None for non-objects, so only objects reach here
    match kind {
        RecordKind::Summary => match serde_json::from_value::<SummaryLine>(value) {
            Ok(line) => Record::Summary { text: line.summary },
            Err(_) => Record::Unrecognized,
        },
        RecordKind::User => match serde_json::from_value::<TurnLine>(value) {
            Ok(line) => {
                let message = line.message.unwrap_or_default();
                Record::UserTurn { content: decode_content(message.content), timestamp: line.timestamp }
            }
            Err(_) => Record::Unrecognized,
        },
        RecordKind::Assistant => match serde_json::from_value::<TurnLine>(value) {
            Ok(line) => {
                let message = line.message.unwrap_or_default();
                Record::AssistantTurn {
                    content: decode_content(message.content),
                    timestamp: line.timestamp,
                    model: message.model,
                }
            }
            Err(_) => Record::Unrecognized,
        },
    }
}

/// Classify `message.content` by shape
pub fn decode_content(content: Option<Value>) -> MessageContent {
    match content {
        None => MessageContent::Absent,
        Some(Value::String(text)) => MessageContent::Text(text),
        Some(Value::Array(blocks)) => {
            MessageContent::Blocks(blocks.into_iter().map(decode_block).collect())
        }
        Some(other) => MessageContent::Other(other),
    }
}

/// Decode one element of a content sequence; unknown shapes become [`ContentBlock::Other`]
pub fn decode_block(value: Value) -> ContentBlock {
    let block_type = match value.get("type").and_then(Value::as_str) {
        Some(block_type) => block_type.to_string(),
        None => return ContentBlock::Other,
    };

    let decoded = match block_type.as_str() {
        BLOCK_TYPE_TEXT => {
            serde_json::from_value::<TextBlock>(value).map(|b| ContentBlock::Text { text: b.text })
        }
        BLOCK_TYPE_THINKING => serde_json::from_value::<ThinkingBlock>(value)
            .map(|b| ContentBlock::Thinking { text: b.thinking }),
        BLOCK_TYPE_TOOL_USE => serde_json::from_value::<ToolUseBlock>(value)
            .map(|b| ContentBlock::ToolUse { name: b.name, input: b.input }),
        BLOCK_TYPE_TOOL_RESULT => serde_json::from_value::<ToolResultBlock>(value)
            .map(|b| ContentBlock::ToolResult { text: b.content }),
        _ => return ContentBlock::Other,
    };

    decoded.unwrap_or(ContentBlock::Other)
}
