//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use claude_history_viewer::Archive;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ArchiveBuilder {
    temp_dir: TempDir,
}

impl ArchiveBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add an (initially empty) project directory
    pub fn with_empty_project(self, folder: &str) -> Self {
        let project_dir = self.temp_dir.path().join("projects").join(folder);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        self
    }

    /// Add a project directory with the given transcripts
    pub fn with_project(self, folder: &str, transcripts: &[TranscriptBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join("projects").join(folder);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for transcript in transcripts {
            transcript.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Archive reading from a built .claude directory
pub fn archive_for(claude_dir: &TempDir) -> Archive {
    Archive::from_claude_dir(claude_dir.path())
}

/// Builder for one transcript file
pub struct TranscriptBuilder {
    filename: String,
    lines: Vec<String>,
}

impl TranscriptBuilder {
    /// Create a new transcript with the given filename
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    /// Add a record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Add a raw line, verbatim (blank, malformed, partial writes, ...)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        let content = self.lines.join("\n");
        fs::write(dir.join(&self.filename), content).expect("Failed to write transcript");
    }
}

/// Builder for transcript records
pub struct RecordBuilder {
    record_type: String,
    content: Option<Value>,
    summary: Option<String>,
    timestamp: Option<String>,
    model: Option<String>,
}

impl RecordBuilder {
    /// Create a new user turn
    pub fn user() -> Self {
        Self {
            record_type: "user".to_string(),
            content: Some(json!("Test message")),
            summary: None,
            timestamp: Some("2025-01-15T10:30:00.000Z".to_string()),
            model: None,
        }
    }

    /// Create a new assistant turn
    pub fn assistant() -> Self {
        Self {
            record_type: "assistant".to_string(),
            content: Some(json!([{"type": "text", "text": "Test response"}])),
            summary: None,
            timestamp: Some("2025-01-15T10:30:05.000Z".to_string()),
            model: Some("claude-sonnet-4-20250514".to_string()),
        }
    }

    /// Create a summary record
    pub fn summary(text: &str) -> Self {
        Self {
            record_type: "summary".to_string(),
            content: None,
            summary: Some(text.to_string()),
            timestamp: None,
            model: None,
        }
    }

    /// Set plain string content
    pub fn text(mut self, text: &str) -> Self {
        self.content = Some(json!(text));
        self
    }

    /// Set content blocks (thinking, tool_use, tool_result, ...)
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Some(Value::Array(blocks));
        self
    }

    /// Set the timestamp
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    /// Remove the timestamp
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    /// Set the model
    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// A text block
    pub fn text_block(text: &str) -> Value {
        json!({"type": "text", "text": text})
    }

    /// A thinking block
    pub fn thinking_block(text: &str) -> Value {
        json!({"type": "thinking", "thinking": text, "signature": "sig"})
    }

    /// A tool_use block
    pub fn tool_use_block(name: &str, input: Value) -> Value {
        json!({"type": "tool_use", "id": "toolu_01", "name": name, "input": input})
    }

    /// A tool_result block
    pub fn tool_result_block(content: Value) -> Value {
        json!({"type": "tool_result", "tool_use_id": "toolu_01", "content": content})
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        let mut record = json!({
            "type": self.record_type,
            "uuid": "550e8400-e29b-41d4-a716-446655440001",
            "sessionId": "550e8400-e29b-41d4-a716-446655440000",
        });

        if let Some(summary) = &self.summary {
            record["summary"] = json!(summary);
        }
        if let Some(content) = &self.content {
            let mut message = json!({"role": self.record_type, "content": content});
            if let Some(model) = &self.model {
                message["model"] = json!(model);
            }
            record["message"] = message;
        }
        if let Some(timestamp) = &self.timestamp {
            record["timestamp"] = json!(timestamp);
        }

        record.to_string()
    }
}

/// Helper to create a realistic .claude directory with sample data
pub fn realistic_claude_dir() -> TempDir {
    ArchiveBuilder::new()
        .with_project(
            "-Users-alice-project",
            &[
                TranscriptBuilder::new("older.jsonl")
                    .with_record(RecordBuilder::summary("Refactor the parser"))
                    .with_record(
                        RecordBuilder::user().text("Please refactor").timestamp("2025-01-10T09:00:00Z"),
                    )
                    .with_record(RecordBuilder::assistant()),
                TranscriptBuilder::new("newer.jsonl")
                    .with_record(
                        RecordBuilder::user()
                            .text("Fix the bug in parser.py please")
                            .timestamp("2025-02-01T12:00:00Z"),
                    )
                    .with_record(RecordBuilder::assistant().blocks(vec![
                        RecordBuilder::thinking_block("Looking at parser.py"),
                        RecordBuilder::tool_use_block("Read", json!({"file_path": "parser.py"})),
                    ]))
                    .with_record(RecordBuilder::user().blocks(vec![RecordBuilder::tool_result_block(
                        json!("def parse(): pass"),
                    )])),
                TranscriptBuilder::new("agent-sub.jsonl")
                    .with_record(RecordBuilder::user().text("Sub-agent task")),
            ],
        )
        .with_project(
            "-Users-bob-api",
            &[TranscriptBuilder::new("only.jsonl").with_record(RecordBuilder::user().text("Hello"))],
        )
        .build()
}
