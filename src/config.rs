use std::path::PathBuf;

use anyhow::bail;

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub article_dir: PathBuf,
    pub out_path: PathBuf,

    /// abort the whole run when a single document fails to parse
    pub strict: bool,
    pub include_drafts: bool,
}

impl Config {
    pub fn new(article_dir: PathBuf, out_path: PathBuf) -> Self {
        Self {
            article_dir,
            out_path,
            strict: false,
            include_drafts: false,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.article_dir.exists() || !self.article_dir.is_dir() {
            bail!("article_dir({:?}) must be a directory.", self.article_dir);
        }
        if self.out_path.is_dir() {
            bail!("out_path({:?}) must not be a directory.", self.out_path);
        }
        Ok(())
    }
}
