//! Index bundle construction.
//!
//! The [`IndexBundle`] is the aggregate one ingestion run produces: the
//! primary post-by-id map plus the tag, series, and project indices. Merging
//! is sequential and per-post idempotent; secondary buckets only ever gain a
//! file name in the same call that inserts the post itself, so every id in a
//! bucket is a key of the primary map.
//!
//! Bucket order is append order. The orchestrator merges in ascending
//! `(date, file_name)` order, which makes series positions ("Part N")
//! publication order, stable across runs.

use std::collections::BTreeMap;

use crate::frontmatter::split_list;
use crate::models::Post;

/// All indices produced by one ingestion run.
#[derive(Debug, Clone, Default)]
pub struct IndexBundle {
    /// Primary map: file name → parsed post.
    pub posts: BTreeMap<String, Post>,
    /// Tag name → file names bearing that tag, in merge order.
    pub tags: BTreeMap<String, Vec<String>>,
    /// Series name → member file names, in merge order.
    pub series: BTreeMap<String, Vec<String>>,
    /// Project name → file names referencing that project.
    pub projects: BTreeMap<String, Vec<String>>,
}

impl IndexBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed post into the bundle.
    ///
    /// A file name already present in the primary map is a no-op, so
    /// re-merging the same post cannot duplicate bucket entries. Each field
    /// feeds exactly one index; there is no key-driven dispatch.
    pub fn merge(&mut self, post: Post) {
        if self.posts.contains_key(&post.file_name) {
            return;
        }

        if let Some(tags) = &post.tags {
            for tag in split_list(tags) {
                self.tags.entry(tag).or_default().push(post.file_name.clone());
            }
        }
        if let Some(series) = &post.series {
            for name in split_list(series) {
                self.series.entry(name).or_default().push(post.file_name.clone());
            }
        }
        for project in &post.projects {
            self.projects
                .entry(project.clone())
                .or_default()
                .push(post.file_name.clone());
        }

        self.posts.insert(post.file_name.clone(), post);
    }

    /// Posts sorted newest first; ties broken by ascending file name.
    ///
    /// Dates compare as strings: ISO-style dates order correctly and a
    /// malformed or missing date simply sorts last.
    pub fn sorted_by_recency(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.values().collect();
        posts.sort_by(|a, b| {
            let da = a.date.as_deref().unwrap_or("");
            let db = b.date.as_deref().unwrap_or("");
            db.cmp(da).then_with(|| a.file_name.cmp(&b.file_name))
        });
        posts
    }

    /// 1-based position of `post` within its series bucket, if any.
    ///
    /// Looks the series up by the post's full display string; a stale or
    /// multi-valued series field yields `None` and the caller omits the
    /// label.
    pub fn series_part(&self, post: &Post) -> Option<usize> {
        let series = post.series.as_deref()?;
        let members = self.series.get(series)?;
        members
            .iter()
            .position(|f| f == &post.file_name)
            .map(|i| i + 1)
    }
}
