//! Ingestion orchestration.
//!
//! Drives the full run: list identifiers from the configured source, fetch
//! and parse every document concurrently, then merge the survivors into an
//! [`IndexBundle`]. A single document's fetch or parse failure is logged and
//! that document is excluded. It never aborts the batch, and the
//! orchestrator always returns a bundle.
//!
//! The concurrent phase is side-effect free: each task returns its parsed
//! post (or nothing). Results are sorted by `(date, file_name)` before the
//! sequential merge, so bucket order (and series part numbering) is
//! publication order, identical on every run over the same corpus.

use anyhow::{Context, Result};
use futures::future::join_all;
use tracing::{debug, warn};

use crate::config::Config;
use crate::frontmatter::parse_post;
use crate::index::IndexBundle;
use crate::models::Post;
use crate::sources::{resolve_source, PostSource};

/// Fetch, parse, and index the whole corpus behind `source`.
///
/// Infallible by contract: failed documents are skipped, and an empty
/// identifier list yields an empty bundle.
pub async fn build_bundle(source: &dyn PostSource, file_names: Vec<String>) -> IndexBundle {
    let tasks = file_names.into_iter().map(|file_name| async move {
        match fetch_and_parse(source, &file_name).await {
            Ok(post) => Some(post),
            Err(error) => {
                warn!(file = %file_name, error = %error, "skipping post");
                None
            }
        }
    });

    let mut posts: Vec<Post> = join_all(tasks).await.into_iter().flatten().collect();

    // Deterministic join: merge in publication order, not completion order.
    posts.sort_by(|a, b| {
        let da = a.date.as_deref().unwrap_or("");
        let db = b.date.as_deref().unwrap_or("");
        da.cmp(db).then_with(|| a.file_name.cmp(&b.file_name))
    });

    let mut bundle = IndexBundle::new();
    for post in posts {
        bundle.merge(post);
    }
    bundle
}

async fn fetch_and_parse(source: &dyn PostSource, file_name: &str) -> Result<Post> {
    let raw = source
        .fetch(file_name)
        .await
        .with_context(|| format!("fetch failed for '{}'", file_name))?;
    debug!(file = %file_name, bytes = raw.len(), "fetched");
    parse_post(file_name, &raw)
}

/// Resolve the configured source and ingest everything it lists.
///
/// Listing failures propagate; per-document failures do not.
pub async fn load_bundle(config: &Config) -> Result<IndexBundle> {
    let source = resolve_source(config)?;
    let file_names = source.list().await?;
    Ok(build_bundle(source.as_ref(), file_names).await)
}

/// CLI entry point for `posts ingest`: runs one ingestion and prints a
/// summary.
pub async fn run_ingest(config: &Config, limit: Option<usize>) -> Result<()> {
    let source = resolve_source(config)?;
    let mut file_names = source.list().await?;
    file_names.sort();
    if let Some(lim) = limit {
        file_names.truncate(lim);
    }

    let listed = file_names.len();
    let bundle = build_bundle(source.as_ref(), file_names).await;

    println!("ingest {}", source.name());
    println!("  source: {}", source.description());
    println!("  listed: {} files", listed);
    println!("  indexed posts: {}", bundle.posts.len());
    println!("  skipped: {}", listed - bundle.posts.len());
    println!("  tags: {}", bundle.tags.len());
    println!("  series: {}", bundle.series.len());
    println!("  projects: {}", bundle.projects.len());
    println!("ok");

    Ok(())
}
