use serde::Serialize;

/// Summary shown for a conversation with neither a summary record nor a
/// plain-text first user message.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content";

/// Conversation-level metadata collected while reading a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationMeta {
    pub display_summary: String,
    /// Timestamp of the first user turn, or empty
    pub sort_timestamp: String,
}

impl Default for ConversationMeta {
    fn default() -> Self {
        Self { display_summary: NO_CONTENT_PLACEHOLDER.to_string(), sort_timestamp: String::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSummary {
    /// Log file name, extension included
    pub file: String,
    /// Log file name without extension
    #[serde(rename = "session_id")]
    pub file_id: String,
    #[serde(rename = "summary")]
    pub display_summary: String,
    #[serde(rename = "timestamp")]
    pub sort_timestamp: String,
}

impl ConversationSummary {
    pub fn new(file: String, file_id: String, meta: ConversationMeta) -> Self {
        Self {
            file,
            file_id,
            display_summary: meta.display_summary,
            sort_timestamp: meta.sort_timestamp,
        }
    }
}
