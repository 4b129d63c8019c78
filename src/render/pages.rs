//! Full HTML documents built from catalog listings and rendered messages.
//!
//! These functions hold no parsing logic. Message content arrives already
//! sanitized and is embedded verbatim; every other dynamic string is escaped here.

use std::fmt::Write as _;

use crate::models::{ConversationSummary, Message, Project, Role};
use crate::render::content::{TRUNCATION_MARKER, escape_html};
use crate::render::styles::STYLES;
use crate::render::timestamps::{format_list_date, format_message_time};
use crate::utils::{decode_project_name, encode_query_component, truncate_chars};

/// Characters of a conversation summary shown on a listing card
pub const LISTING_SUMMARY_CHARS: usize = 80;

const APP_TITLE: &str = "Claude Code History";

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {STYLES}
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>"#
    )
}

fn project_href(folder: &str) -> String {
    format!("/project?name={}", encode_query_component(folder))
}

fn conversation_href(folder: &str, file_id: &str) -> String {
    format!(
        "/conversation?project={}&amp;session={}",
        encode_query_component(folder),
        encode_query_component(file_id)
    )
}

/// Summary cut for a listing card, with a marker when it was shortened
fn listing_summary(summary: &str) -> String {
    let shown = truncate_chars(summary, LISTING_SUMMARY_CHARS);
    let marker = if shown.len() < summary.len() { TRUNCATION_MARKER } else { "" };
    format!("{}{}", escape_html(shown), marker)
}

/// Home page: one card per project
pub fn render_home(projects: &[Project]) -> String {
    let mut cards = String::new();
    for project in projects {
        let _ = write!(
            cards,
            r#"<a href="{}" class="project-card"><div class="project-name">{}</div></a>"#,
            project_href(&project.folder),
            escape_html(&project.display_name)
        );
    }
    if cards.is_empty() {
        cards.push_str("<p>No projects found</p>");
    }

    let body = format!(
        r#"        <header>
            <h1>🤖 Claude Code History Viewer</h1>
            <p class="subtitle">View your conversation history from Claude Code</p>
        </header>
        <main>
            <h2>Projects</h2>
            <div class="project-grid">
                {cards}
            </div>
        </main>"#
    );
    page("Claude Code History Viewer", &body)
}

/// Project page: the project's conversations, newest first
pub fn render_project(folder: &str, conversations: &[ConversationSummary]) -> String {
    let display_name = escape_html(&decode_project_name(folder));

    let mut cards = String::new();
    for conversation in conversations {
        let _ = write!(
            cards,
            r#"<a href="{}" class="conversation-card"><div class="conv-summary">{}</div><div class="conv-time">{}</div></a>"#,
            conversation_href(folder, &conversation.file_id),
            listing_summary(&conversation.display_summary),
            escape_html(&format_list_date(&conversation.sort_timestamp))
        );
    }
    if cards.is_empty() {
        cards.push_str("<p>No conversations found</p>");
    }

    let count = conversations.len();
    let body = format!(
        r#"        <header>
            <a href="/" class="back-link">← Back to Projects</a>
            <h1>📁 {display_name}</h1>
        </header>
        <main>
            <h2>Conversations ({count})</h2>
            <div class="conversation-list">
                {cards}
            </div>
        </main>"#
    );
    page(&format!("{display_name} - {APP_TITLE}"), &body)
}

fn render_message(out: &mut String, message: &Message) {
    let role_label = match message.role {
        Role::User => "👤 User",
        Role::Assistant => "🤖 Claude",
    };
    let model = match message.model.as_deref() {
        Some(model) if !model.is_empty() => {
            format!(r#"<span class="model">{}</span>"#, escape_html(model))
        }
        _ => String::new(),
    };

    let _ = write!(
        out,
        r#"<div class="message {}"><div class="message-header"><span class="role">{}</span><span class="time">{}</span>{}</div><div class="message-content">{}</div></div>"#,
        message.role.as_str(),
        role_label,
        escape_html(&format_message_time(&message.timestamp)),
        model,
        message.rendered_content
    );
}

/// Conversation page: every message in file order
pub fn render_conversation(folder: &str, file_id: &str, messages: &[Message]) -> String {
    let display_name = escape_html(&decode_project_name(folder));

    let mut rendered = String::new();
    for message in messages {
        render_message(&mut rendered, message);
    }
    if rendered.is_empty() {
        rendered.push_str("<p>No messages found</p>");
    }

    let body = format!(
        r#"        <header>
            <a href="{back}" class="back-link">← Back to {display_name}</a>
            <h1>💬 Conversation</h1>
            <p class="subtitle">Session: {session}</p>
        </header>
        <main class="messages-container">
            {rendered}
        </main>"#,
        back = project_href(folder),
        session = escape_html(file_id),
    );
    page(&format!("Conversation - {APP_TITLE}"), &body)
}
