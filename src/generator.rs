use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info, warn};

use crate::{config::Config, frontmatter, output::save_posts, renderer};

use self::{
    data::Post,
    utils::{is_markdown, is_valid_date, sort_post},
};

pub(crate) mod data;
mod utils;

/// Builds a post from one document, or `None` when it is a draft that
/// should be left out.
fn preprocess_file(
    slug: &str,
    content: &str,
    include_drafts: bool,
) -> anyhow::Result<Option<Post>> {
    let content = content.replace("\r\n", "\n");
    let (metadata, body) = frontmatter::extract(&content)?;
    if metadata.is_empty() {
        debug!("{slug}: no front matter");
    } else {
        debug!(
            "{slug}: {} front matter keys: {}",
            metadata.len(),
            serde_json::to_string(&metadata)?
        );
    }

    if metadata.bool("draft") == Some(true) && !include_drafts {
        info!("Skipping draft {slug}");
        return Ok(None);
    }

    let post = Post {
        title: metadata.text("title").unwrap_or_default().to_string(),
        slug: metadata.text("slug").unwrap_or(slug).to_string(),
        date: metadata.text("date").unwrap_or_default().to_string(),
        summary: metadata.text("summary").unwrap_or_default().to_string(),
        tags: metadata.list("tags").map(<[String]>::to_vec).unwrap_or_default(),
        featured: metadata.bool("featured").unwrap_or(false),
        content: renderer::render(body),
    };
    if !is_valid_date(&post.date) {
        warn!("{slug}: date {:?} is not a calendar date", post.date);
    }

    Ok(Some(post))
}

fn list_articles(article_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = vec![];
    for entry in std::fs::read_dir(article_dir)
        .with_context(|| format!("while listing {:?}", article_dir))?
    {
        let entry = entry?;
        let path = entry.path();
        if entry.metadata()?.is_file() && is_markdown(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Reads every markdown file of the article directory and returns the
/// published posts, newest first.
pub(crate) fn collect_posts(config: &Config) -> anyhow::Result<Vec<Post>> {
    let mut posts = vec![];

    for path in list_articles(&config.article_dir)? {
        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let result = std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|content| preprocess_file(&slug, &content, config.include_drafts))
            .with_context(|| format!("while preprocessing {:?}", path));
        match result {
            Ok(Some(post)) => posts.push(post),
            Ok(None) => {}
            Err(e) if config.strict => return Err(e),
            Err(e) => warn!("Skipping {:?}: {:#}", path, e),
        }
    }

    posts.sort_by(sort_post);
    Ok(posts)
}

/// Collects posts and writes them to the output path. Returns the number of
/// posts written.
pub(crate) fn generate(config: &Config) -> anyhow::Result<usize> {
    let posts = collect_posts(config)?;
    save_posts(&config.out_path, &posts)
        .with_context(|| format!("while writing {:?}", config.out_path))?;
    info!("Wrote {} posts to {:?}", posts.len(), config.out_path);

    Ok(posts.len())
}
