use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};

/// Get the Claude directory path (~/.claude)
///
/// Uses `HOME` when set and falls back to the platform home directory.
pub fn get_claude_dir() -> Result<PathBuf> {
    let home = match env::var_os("HOME").filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home),
        None => match dirs::home_dir() {
            Some(home) => home,
            None => bail!("HOME environment variable not set and no home directory found"),
        },
    };
    Ok(home.join(".claude"))
}
