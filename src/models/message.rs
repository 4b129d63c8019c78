use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A display-ready message.
///
/// `rendered_content` is already sanitized markup and must be embedded without
/// escaping it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    #[serde(rename = "content")]
    pub rendered_content: String,
    pub timestamp: String,
    /// Only set for assistant messages; may be empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
