pub mod environment;
pub mod paths;
pub mod text;

pub use environment::get_claude_dir;
pub use paths::{
    decode_project_name, encode_query_component, format_path_with_tilde, is_single_component,
};
pub use text::truncate_chars;
