use crate::models::{ContentBlock, MessageContent};
use crate::utils::truncate_chars;

/// Characters of a tool result shown before it is cut off
pub const TOOL_RESULT_MAX_CHARS: usize = 500;

/// Appended after a truncated tool result
pub const TRUNCATION_MARKER: &str = "...";

/// Separator between the fragments of one message
const FRAGMENT_SEPARATOR: &str = "\n";

/// Escapes `& < > " '` for safe embedding in element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render message content to sanitized markup.
///
/// Plain strings are escaped verbatim. Block sequences render block by block,
/// joined by newlines, with unknown blocks dropped. Any other JSON shape is
/// rendered as its JSON text.
pub fn render_content(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => escape_html(text),
        MessageContent::Blocks(blocks) => {
            blocks.iter().filter_map(render_block).collect::<Vec<_>>().join(FRAGMENT_SEPARATOR)
        }
        MessageContent::Other(value) => escape_html(&value.to_string()),
        MessageContent::Absent => String::new(),
    }
}

/// Render a single content block, or `None` if it contributes nothing
pub fn render_block(block: &ContentBlock) -> Option<String> {
    match block {
        ContentBlock::Text { text } => Some(escape_html(text)),
        ContentBlock::Thinking { text } if text.is_empty() => None,
        ContentBlock::Thinking { text } => Some(format!(
            r#"<details class="thinking"><summary>💭 Thinking...</summary><pre>{}</pre></details>"#,
            escape_html(text)
        )),
        ContentBlock::ToolUse { name, input } => {
            let pretty = serde_json::to_string_pretty(input).unwrap_or_else(|_| input.to_string());
            Some(format!(
                r#"<div class="tool-use"><strong>🔧 {}</strong><pre>{}</pre></div>"#,
                escape_html(name),
                escape_html(&pretty)
            ))
        }
        ContentBlock::ToolResult { text: Some(text) } => {
            let shown = truncate_chars(text, TOOL_RESULT_MAX_CHARS);
            let marker = if shown.len() < text.len() { TRUNCATION_MARKER } else { "" };
            Some(format!(
                r#"<div class="tool-result"><pre>{}{}</pre></div>"#,
                escape_html(shown),
                marker
            ))
        }
        ContentBlock::ToolResult { text: None } | ContentBlock::Other => None,
    }
}
