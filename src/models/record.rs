use serde_json::Value;

/// One decoded transcript line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Summary { text: String },
    UserTurn { content: MessageContent, timestamp: String },
    AssistantTurn { content: MessageContent, timestamp: String, model: String },
    /// Any other or malformed shape. The line is ignored.
    Unrecognized,
}

/// `message.content` of a user or assistant turn.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    /// Plain string content, rendered verbatim (escaped)
    Text(String),
    /// Sequence of content blocks, rendered block by block
    Blocks(Vec<ContentBlock>),
    /// Any other JSON shape (null, number, object, ...), rendered as its JSON text
    Other(Value),
    /// No `content` key at all
    Absent,
}

impl MessageContent {
    /// Plain-string content, if that is the shape of this content
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// One typed fragment of a message's content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text { text: String },
    /// Hidden reasoning, rendered collapsed
    Thinking { text: String },
    ToolUse { name: String, input: Value },
    /// `text` is `None` when the result content is not a plain string
    ToolResult { text: Option<String> },
    Other,
}
