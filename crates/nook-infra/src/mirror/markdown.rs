//! Markdown sidecar files with `---` front matter.
//!
//! The layout is the one Hexo, Hugo and Obsidian read directly:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-05-01 12:30:00
//! tags: [rust, web]
//! summary: First post
//! ---
//!
//! Body text
//! ```

use std::path::PathBuf;

use async_trait::async_trait;

use nook_core::domain::Post;
use nook_core::ports::{MirrorError, PostMirror};

/// `date:` line format.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes one `<id>-<title>.md` file per published post.
#[derive(Debug, Clone)]
pub struct MarkdownMirror {
    dir: PathBuf,
}

impl MarkdownMirror {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where the sidecar for `post` lives.
    pub fn path_for(&self, post: &Post) -> PathBuf {
        self.dir.join(sidecar_file_name(post))
    }
}

#[async_trait]
impl PostMirror for MarkdownMirror {
    async fn mirror(&self, post: &Post) -> Result<PathBuf, MirrorError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| MirrorError::Io {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.path_for(post);
        tokio::fs::write(&path, render_markdown(post))
            .await
            .map_err(|source| MirrorError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Sidecar written");
        Ok(path)
    }
}

/// Replace the characters that would break a file name.
pub fn sanitize_title(title: &str) -> String {
    title.replace(['/', ' '], "-")
}

/// `<id>-<sanitized title>.md`
pub fn sidecar_file_name(post: &Post) -> String {
    format!("{}-{}.md", post.id, sanitize_title(&post.title))
}

/// Front matter followed by the raw content.
pub fn render_markdown(post: &Post) -> String {
    format!(
        "---\ntitle: {}\ndate: {}\ntags: [{}]\nsummary: {}\n---\n\n{}\n",
        post.title,
        post.created_at.format(DATE_FORMAT),
        post.tags,
        post.summary,
        post.content,
    )
}
