use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Grouping configuration for the series view (summaries only in
    /// practice; series are rarely grouped).
    #[serde(default)]
    pub series: GroupingConfig,
    /// Grouping configuration for the tag view.
    #[serde(default)]
    pub tags: GroupingConfig,
}

/// Where the post corpus lives. Exactly one of the variants must be set.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SourceConfig {
    pub filesystem: Option<FilesystemSourceConfig>,
    pub github: Option<GitHubSourceConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilesystemSourceConfig {
    /// Directory containing the `.md` post files.
    pub root: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*.md".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct GitHubSourceConfig {
    pub owner: String,
    pub repo: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Repository subdirectory holding the posts, e.g. `public/assets/posts`.
    pub path_prefix: String,
}

fn default_branch() -> String {
    "main".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LayoutConfig {
    /// Sections per rendered row.
    #[serde(default = "default_columns")]
    pub columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

fn default_columns() -> usize {
    3
}

/// Static display configuration for one segment view (tags or series).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GroupingConfig {
    /// Named groups in declaration order. Tags not claimed by any group fall
    /// into the implicit "Other" group; with no groups at all the whole view
    /// is one header-less bucket.
    #[serde(default)]
    pub groups: Vec<GroupDef>,
    /// Per-section display metadata keyed by tag or series name.
    #[serde(default)]
    pub titles: HashMap<String, SectionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GroupDef {
    pub name: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SectionInfo {
    #[serde(default)]
    pub summary: Option<String>,
    /// Common synonyms shown next to the section title, e.g. `["JS"]`.
    #[serde(default)]
    pub common: Vec<String>,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    match (&config.source.filesystem, &config.source.github) {
        (None, None) => anyhow::bail!("No source configured: set [source.filesystem] or [source.github]"),
        (Some(_), Some(_)) => {
            anyhow::bail!("Multiple sources configured: set only one of [source.filesystem] and [source.github]")
        }
        _ => {}
    }

    if config.layout.columns == 0 {
        anyhow::bail!("layout.columns must be >= 1");
    }

    for grouping in [&config.series, &config.tags] {
        for group in &grouping.groups {
            if group.name.trim().is_empty() {
                anyhow::bail!("Group names must not be empty");
            }
        }
    }

    Ok(config)
}
