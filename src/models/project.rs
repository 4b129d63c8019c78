use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Directory name, taken as-is from the filesystem
    pub folder: String,
    /// Folder name with `/` separators reconstructed
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "path")]
    pub project_dir: PathBuf,
}
