use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::generator::data::Post;

/// Writes `posts` as a pretty-printed JSON array, creating the parent
/// directory when needed.
pub(crate) fn save_posts(out_path: &Path, posts: &[Post]) -> anyhow::Result<()> {
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            info!("Creating output directory {parent:?}");
            fs_extra::dir::create_all(parent, false)?;
        }
    }

    let out_fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(out_path)?;
    let mut writer = BufWriter::new(out_fd);
    serde_json::to_writer_pretty(&mut writer, posts)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn post(slug: &str) -> Post {
        Post {
            title: "Title".to_string(),
            slug: slug.to_string(),
            date: "2024-01-01".to_string(),
            summary: String::new(),
            tags: vec!["a".to_string()],
            featured: true,
            content: "<p>x</p>".to_string(),
        }
    }

    #[test]
    fn test_save_posts_creates_parent() {
        let dir = TempDir::new().unwrap();
        let out_path = dir.path().join("nested").join("deeper").join("posts.json");
        save_posts(&out_path, &[post("a")]).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
        assert_eq!(written[0]["slug"], "a");
        assert_eq!(written[0]["featured"], true);
    }

    #[test]
    fn test_save_posts_pretty_and_truncates() {
        let dir = TempDir::new().unwrap();
        let out_path = dir.path().join("posts.json");
        save_posts(&out_path, &[post("a"), post("b")]).unwrap();
        save_posts(&out_path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "[]");

        save_posts(&out_path, &[post("c")]).unwrap();
        let text = std::fs::read_to_string(&out_path).unwrap();
        assert!(text.contains("\n  {\n"));
    }
}
