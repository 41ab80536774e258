//! Post mirrors - portable copies of published posts.

mod markdown;

pub use markdown::{MarkdownMirror, render_markdown, sanitize_title, sidecar_file_name};
