//! Remote GitHub repository post source.
//!
//! Listing walks the repository tree for the configured branch: the
//! branches API yields the head commit's tree URL, and one recursive tree
//! request yields every path in the repository. Paths under `path_prefix`
//! ending in `.md` become document identifiers. Fetching downloads the raw
//! file from `raw.githubusercontent.com`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::GitHubSourceConfig;
use crate::sources::PostSource;

/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("post-harness/", env!("CARGO_PKG_VERSION"));

pub struct GitHubSource {
    config: GitHubSourceConfig,
    client: reqwest::Client,
}

impl GitHubSource {
    pub fn new(config: GitHubSourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { config, client })
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {}", url))?;
        if !response.status().is_success() {
            anyhow::bail!("GitHub API returned {} for {}", response.status(), url);
        }
        response
            .json()
            .await
            .with_context(|| format!("Invalid JSON from {}", url))
    }
}

#[async_trait]
impl PostSource for GitHubSource {
    fn name(&self) -> &str {
        "github"
    }

    fn description(&self) -> String {
        format!(
            "github.com/{}/{} branch {}",
            self.config.owner, self.config.repo, self.config.branch
        )
    }

    async fn list(&self) -> Result<Vec<String>> {
        let branch_url = format!(
            "https://api.github.com/repos/{}/{}/branches/{}",
            self.config.owner, self.config.repo, self.config.branch
        );
        let branch = self.get_json(&branch_url).await?;

        let tree_url = branch
            .pointer("/commit/commit/tree/url")
            .and_then(Value::as_str)
            .with_context(|| format!("No tree URL in branch response from {}", branch_url))?;

        let tree = self.get_json(&format!("{}?recursive=true", tree_url)).await?;
        let entries = tree
            .pointer("/tree")
            .and_then(Value::as_array)
            .context("No tree entries in recursive tree response")?;

        let prefix = format!("{}/", self.config.path_prefix.trim_matches('/'));
        let mut names: Vec<String> = entries
            .iter()
            .filter_map(|entry| entry.pointer("/path").and_then(Value::as_str))
            .filter_map(|path| path.strip_prefix(&prefix))
            .filter_map(|path| path.strip_suffix(".md"))
            .map(str::to_string)
            .collect();

        names.sort();
        Ok(names)
    }

    async fn fetch(&self, file_name: &str) -> Result<String> {
        let url = format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}/{}.md",
            self.config.owner,
            self.config.repo,
            self.config.branch,
            self.config.path_prefix.trim_matches('/'),
            file_name
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request failed: {}", url))?;
        if !response.status().is_success() {
            anyhow::bail!("Raw fetch returned {} for {}", response.status(), url);
        }
        response
            .text()
            .await
            .with_context(|| format!("Failed to read body from {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> GitHubSource {
        GitHubSource::new(GitHubSourceConfig {
            owner: "someone".to_string(),
            repo: "blog".to_string(),
            branch: "main".to_string(),
            path_prefix: "public/assets/posts".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_description_names_repo_and_branch() {
        assert_eq!(source().description(), "github.com/someone/blog branch main");
    }
}
