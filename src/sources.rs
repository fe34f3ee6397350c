//! Post source abstraction.
//!
//! A [`PostSource`] supplies the corpus: a listing of document identifiers
//! and the raw text for each. The engine does not care whether the corpus is
//! a local directory or a remote repository tree; identifiers are opaque
//! strings (file names without the `.md` extension).

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;
use crate::source_fs::FilesystemSource;
use crate::source_github::GitHubSource;

/// A corpus of raw post documents.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Source type identifier (e.g. `"filesystem"`, `"github"`).
    fn name(&self) -> &str;

    /// One-line description of where the posts come from.
    fn description(&self) -> String;

    /// List the available document identifiers.
    ///
    /// May perform I/O. A listing failure aborts the run: with no
    /// identifiers there is no batch to ingest.
    async fn list(&self) -> Result<Vec<String>>;

    /// Fetch one document's raw text by identifier.
    ///
    /// Failures are per-document: the orchestrator logs and skips.
    async fn fetch(&self, file_name: &str) -> Result<String>;
}

/// Build the configured source.
///
/// `load_config` guarantees exactly one of the source sections is present.
pub fn resolve_source(config: &Config) -> Result<Box<dyn PostSource>> {
    if let Some(fs_config) = &config.source.filesystem {
        return Ok(Box::new(FilesystemSource::new(fs_config.clone())));
    }
    if let Some(gh_config) = &config.source.github {
        return Ok(Box::new(GitHubSource::new(gh_config.clone())?));
    }
    anyhow::bail!("No source configured")
}

/// Print the source status table for `posts sources`.
pub fn list_sources(config: &Config) -> Result<()> {
    println!("{:<12} {:<50} STATUS", "SOURCE", "LOCATION");

    match (&config.source.filesystem, &config.source.github) {
        (Some(fs_config), _) => {
            let status = if fs_config.root.exists() {
                "OK"
            } else {
                "root does not exist"
            };
            println!(
                "{:<12} {:<50} {}",
                "filesystem",
                fs_config.root.display().to_string(),
                status
            );
        }
        (_, Some(gh_config)) => {
            println!(
                "{:<12} {:<50} {}",
                "github",
                format!(
                    "{}/{}@{} ({})",
                    gh_config.owner, gh_config.repo, gh_config.branch, gh_config.path_prefix
                ),
                "OK"
            );
        }
        (None, None) => {
            println!("{:<12} {:<50} {}", "-", "-", "NOT CONFIGURED");
        }
    }

    Ok(())
}
