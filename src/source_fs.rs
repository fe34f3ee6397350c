//! Local directory post source.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::config::FilesystemSourceConfig;
use crate::sources::PostSource;

/// Reads posts from a directory of `.md` files.
///
/// Identifiers are root-relative paths with the `.md` extension stripped,
/// sorted for a deterministic listing.
pub struct FilesystemSource {
    config: FilesystemSourceConfig,
}

impl FilesystemSource {
    pub fn new(config: FilesystemSourceConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PostSource for FilesystemSource {
    fn name(&self) -> &str {
        "filesystem"
    }

    fn description(&self) -> String {
        format!("local directory {}", self.config.root.display())
    }

    async fn list(&self) -> Result<Vec<String>> {
        let root = &self.config.root;
        if !root.exists() {
            bail!("Post directory does not exist: {}", root.display());
        }

        let include_set = build_globset(&self.config.include_globs)?;
        let exclude_set = build_globset(&self.config.exclude_globs)?;

        let mut names = Vec::new();

        let walker = WalkDir::new(root).follow_links(self.config.follow_symlinks);
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            let rel_str = relative.to_string_lossy().to_string();

            if exclude_set.is_match(&rel_str) {
                continue;
            }
            if !include_set.is_match(&rel_str) {
                continue;
            }

            let name = rel_str.strip_suffix(".md").unwrap_or(&rel_str);
            names.push(name.to_string());
        }

        names.sort();
        Ok(names)
    }

    async fn fetch(&self, file_name: &str) -> Result<String> {
        let path = self.config.root.join(format!("{}.md", file_name));
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilesystemSourceConfig;
    use std::fs;

    fn source_for(root: &std::path::Path) -> FilesystemSource {
        FilesystemSource::new(FilesystemSourceConfig {
            root: root.to_path_buf(),
            include_globs: vec!["**/*.md".to_string()],
            exclude_globs: vec![],
            follow_symlinks: false,
        })
    }

    #[tokio::test]
    async fn test_list_strips_extension_and_sorts() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("zeta.md"), "z").unwrap();
        fs::write(tmp.path().join("alpha.md"), "a").unwrap();
        fs::write(tmp.path().join("notes.txt"), "skipped").unwrap();

        let names = source_for(tmp.path()).list().await.unwrap();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn test_list_includes_subdirectories() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("2020")).unwrap();
        fs::write(tmp.path().join("2020").join("deep.md"), "d").unwrap();

        let names = source_for(tmp.path()).list().await.unwrap();
        assert_eq!(names, vec!["2020/deep"]);
    }

    #[tokio::test]
    async fn test_fetch_reads_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("post.md"), "---\ntitle: T\n---\nbody").unwrap();

        let text = source_for(tmp.path()).fetch("post").await.unwrap();
        assert!(text.contains("title: T"));
    }

    #[tokio::test]
    async fn test_fetch_missing_file_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(source_for(tmp.path()).fetch("absent").await.is_err());
    }

    #[tokio::test]
    async fn test_list_missing_root_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let gone = tmp.path().join("nope");
        assert!(source_for(&gone).list().await.is_err());
    }
}
