/// Stylesheet embedded in every page
pub const STYLES: &str = r#"<style>
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
    background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
    min-height: 100vh;
    color: #e0e0e0;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
}

header {
    text-align: center;
    padding: 40px 20px;
}

header h1 {
    font-size: 2.5em;
    margin-bottom: 10px;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

.subtitle {
    color: #888;
    font-size: 1.1em;
}

.back-link {
    display: inline-block;
    color: #667eea;
    text-decoration: none;
    margin-bottom: 20px;
    font-size: 0.9em;
}

.back-link:hover {
    text-decoration: underline;
}

h2 {
    margin-bottom: 20px;
    color: #ccc;
}

.project-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
    gap: 20px;
}

.project-card {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    padding: 20px;
    text-decoration: none;
    color: inherit;
    transition: all 0.3s ease;
}

.project-card:hover {
    background: rgba(255, 255, 255, 0.1);
    transform: translateY(-2px);
    border-color: #667eea;
}

.project-name {
    font-size: 1.1em;
    font-family: monospace;
    word-break: break-all;
}

.conversation-list {
    display: flex;
    flex-direction: column;
    gap: 10px;
}

.conversation-card {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 8px;
    padding: 15px 20px;
    text-decoration: none;
    color: inherit;
    display: flex;
    justify-content: space-between;
    align-items: center;
    transition: all 0.3s ease;
}

.conversation-card:hover {
    background: rgba(255, 255, 255, 0.1);
    border-color: #667eea;
}

.conv-summary {
    flex: 1;
}

.conv-time {
    color: #888;
    font-size: 0.9em;
    margin-left: 20px;
}

.messages-container {
    display: flex;
    flex-direction: column;
    gap: 20px;
}

.message {
    background: rgba(255, 255, 255, 0.05);
    border-radius: 12px;
    padding: 20px;
    border: 1px solid rgba(255, 255, 255, 0.1);
}

.message.user {
    border-left: 4px solid #4CAF50;
}

.message.assistant {
    border-left: 4px solid #667eea;
}

.message-header {
    display: flex;
    gap: 15px;
    margin-bottom: 15px;
    font-size: 0.9em;
    color: #888;
}

.role {
    font-weight: bold;
    color: #ccc;
}

.model {
    background: rgba(102, 126, 234, 0.2);
    padding: 2px 8px;
    border-radius: 4px;
    font-size: 0.85em;
}

.message-content {
    white-space: pre-wrap;
    word-wrap: break-word;
    line-height: 1.6;
}

.thinking {
    background: rgba(255, 193, 7, 0.1);
    border: 1px solid rgba(255, 193, 7, 0.3);
    border-radius: 8px;
    margin: 10px 0;
    padding: 10px;
}

.thinking summary {
    cursor: pointer;
    color: #ffc107;
}

.thinking pre {
    margin-top: 10px;
    overflow-x: auto;
    font-size: 0.85em;
    color: #ccc;
}

.tool-use {
    background: rgba(76, 175, 80, 0.1);
    border: 1px solid rgba(76, 175, 80, 0.3);
    border-radius: 8px;
    margin: 10px 0;
    padding: 10px;
}

.tool-use pre {
    margin-top: 10px;
    overflow-x: auto;
    font-size: 0.85em;
}

.tool-result {
    background: rgba(158, 158, 158, 0.1);
    border: 1px solid rgba(158, 158, 158, 0.3);
    border-radius: 8px;
    margin: 10px 0;
    padding: 10px;
}

.tool-result pre {
    overflow-x: auto;
    font-size: 0.85em;
    max-height: 200px;
    overflow-y: auto;
}

pre {
    background: rgba(0, 0, 0, 0.2);
    padding: 10px;
    border-radius: 6px;
}
</style>"#;
