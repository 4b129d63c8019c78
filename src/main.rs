use anyhow::Result;

fn main() -> Result<()> {
    claude_history_viewer::cli::run()
}
