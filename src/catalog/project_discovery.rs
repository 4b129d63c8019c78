use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::models::Project;
use crate::utils::decode_project_name;

/// Discover all project directories directly under `projects_dir`
///
/// Hidden directories (names starting with `.`), plain files, and symlinks are
/// skipped. Projects are ordered by display name, then by folder name so that
/// folders decoding to the same name still come out in a stable order.
///
/// # Errors
///
/// Returns an error only if the projects directory exists but cannot be read.
/// A missing projects directory yields an empty list. Individual entries that
/// cannot be read are logged as warnings and skipped.
pub fn discover_projects(projects_dir: &Path) -> Result<Vec<Project>> {
    if !projects_dir.is_dir() {
        debug!(path = %projects_dir.display(), "projects directory not found");
        return Ok(Vec::new());
    }

    let mut projects = Vec::new();
    let walker = WalkDir::new(projects_dir).min_depth(1).max_depth(1).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| {
                    format!("Failed to read projects directory: {}", projects_dir.display())
                });
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable project entry");
                continue;
            }
        };

        // Security: walkdir does not follow links, so symlinked projects are not dirs here
        if !entry.file_type().is_dir() {
            continue;
        }

        let folder = entry.file_name().to_string_lossy().to_string();
        if folder.starts_with('.') {
            continue;
        }

        projects.push(Project {
            display_name: decode_project_name(&folder),
            folder,
            project_dir: entry.into_path(),
        });
    }

    projects.sort_by(|a, b| {
        a.display_name.cmp(&b.display_name).then_with(|| a.folder.cmp(&b.folder))
    });
    debug!(count = projects.len(), "discovered projects");

    Ok(projects)
}
