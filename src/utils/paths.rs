use std::borrow::Cow;
use std::env;
use std::path::{Component, Path};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in query values (RFC 3986 unreserved set)
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Reconstructs a readable path from Claude's project directory name
///
/// Every `-` stands for a `/`; a single leading `/` is dropped.
///
/// # Examples
///
/// ```
/// use claude_history_viewer::decode_project_name;
///
/// assert_eq!(decode_project_name("-Users-alice-project"), "Users/alice/project");
/// ```
pub fn decode_project_name(folder: &str) -> String {
    let replaced = folder.replace('-', "/");
    match replaced.strip_prefix('/') {
        Some(stripped) => stripped.to_string(),
        None => replaced,
    }
}

/// Whether `name` is exactly one normal path component
///
/// Identifiers received from requests (project folders, session ids) must pass
/// this check before being joined onto the archive root, which keeps every
/// lookup inside that root.
pub fn is_single_component(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\', '\0']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

/// Percent-encodes a value for use inside a URL query string
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use claude_history_viewer::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.claude");
/// // Returns "~/.claude" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref()).filter(|h| !h.is_empty());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_decode_project_name() {
        assert_eq!(decode_project_name("-Users-alice-project"), "Users/alice/project");
    }

    #[test]
    fn test_decode_project_name_without_leading_separator() {
        assert_eq!(decode_project_name("relative-dir"), "relative/dir");
    }

    #[test]
    fn test_decode_project_name_strips_only_one_leading_separator() {
        assert_eq!(decode_project_name("--double"), "/double");
    }

    #[test]
    fn test_is_single_component_accepts_plain_names() {
        assert!(is_single_component("-Users-alice-project"));
        assert!(is_single_component("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_single_component("agent-abc123"));
        assert!(is_single_component("..hidden"));
    }

    #[test]
    fn test_is_single_component_rejects_traversal() {
        assert!(!is_single_component(""));
        assert!(!is_single_component("."));
        assert!(!is_single_component(".."));
        assert!(!is_single_component("../etc"));
        assert!(!is_single_component("a/b"));
        assert!(!is_single_component("/etc/passwd"));
        assert!(!is_single_component("..\\windows"));
        assert!(!is_single_component("nul\0byte"));
    }

    #[test]
    fn test_encode_query_component() {
        assert_eq!(encode_query_component("-Users-alice-project"), "-Users-alice-project");
        assert_eq!(encode_query_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_query_component("\"><script>"), "%22%3E%3Cscript%3E");
    }

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/Users/testuser/.claude");
        let formatted = format_path_with_tilde_internal(&path, Some("/Users/testuser"));
        assert_eq!(formatted, "~/.claude");

        // Path not under home
        let path2 = PathBuf::from("/opt/local/bin");
        let formatted2 = format_path_with_tilde_internal(&path2, Some("/Users/testuser"));
        assert_eq!(formatted2, "/opt/local/bin");
    }
}
