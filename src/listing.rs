//! CLI rendering of the index bundle.
//!
//! These commands are the in-repo consumers of the engine: each one runs a
//! fresh ingestion and prints a view of the resulting bundle.

use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::Config;
use crate::index::IndexBundle;
use crate::ingest::load_bundle;
use crate::layout::{build_layout, SegmentLayout};

/// Which segment index a layout command renders.
#[derive(Debug, Clone, Copy)]
pub enum SegmentView {
    Series,
    Tags,
}

/// `posts list`: every post, newest first.
pub async fn run_list(config: &Config) -> Result<()> {
    let bundle = load_bundle(config).await?;

    println!(
        "{:<12} {:<44} {:>7}  {:<28} {}",
        "DATE", "TITLE", "WORDS", "SERIES", "TAGS"
    );
    for post in bundle.sorted_by_recency() {
        let series_text = match (post.series.as_deref(), bundle.series_part(post)) {
            (Some(series), Some(part)) => format!("{} - Part {}", series, part),
            (Some(series), None) => series.to_string(),
            _ => String::new(),
        };
        println!(
            "{:<12} {:<44} {:>7}  {:<28} {}",
            short_date(post.date.as_deref()),
            post.title.as_deref().unwrap_or(&post.file_name),
            post.words,
            series_text,
            post.tags.as_deref().unwrap_or("")
        );
    }
    println!();
    println!("{} posts", bundle.posts.len());

    Ok(())
}

/// `posts show <file-name>`: one post, header fields then body.
pub async fn run_show(config: &Config, file_name: &str) -> Result<()> {
    let bundle = load_bundle(config).await?;

    let Some(post) = bundle.posts.get(file_name) else {
        bail!("post not found: {}", file_name);
    };

    println!("--- {} ---", post.file_name);
    println!("title:    {}", post.title.as_deref().unwrap_or("(untitled)"));
    if let Some(subtitle) = &post.subtitle {
        println!("subtitle: {}", subtitle);
    }
    println!("date:     {}", long_date(post.date.as_deref()));
    if let Some(summary) = &post.summary {
        println!("summary:  {}", summary);
    }
    if let Some(tags) = &post.tags {
        println!("tags:     {}", tags);
    }
    if let Some(series) = &post.series {
        match bundle.series_part(post) {
            Some(part) => println!("series:   {} - Part {}", series, part),
            None => println!("series:   {}", series),
        }
    }
    if !post.projects.is_empty() {
        println!("projects: {}", post.projects.join(", "));
    }
    for (key, value) in &post.extra {
        println!("{}: {}", key, value);
    }
    println!("words:    {}", post.words);
    println!();
    println!("{}", post.body);

    Ok(())
}

/// `posts series` / `posts tags`: the grouped section layout.
pub async fn run_segments(config: &Config, view: SegmentView) -> Result<()> {
    let bundle = load_bundle(config).await?;

    let (segment, grouping) = match view {
        SegmentView::Series => (&bundle.series, &config.series),
        SegmentView::Tags => (&bundle.tags, &config.tags),
    };

    let layout = build_layout(segment, grouping, &bundle, config.layout.columns);
    print_layout(&layout);

    Ok(())
}

fn print_layout(layout: &SegmentLayout) {
    for group in &layout.groups {
        if layout.show_headers {
            println!(
                "== {} ({} tags, {} unique posts) ==",
                group.name, group.section_count, group.unique_posts
            );
            println!();
        }
        for row in &group.rows {
            for section in row {
                println!("{} ({})", section.name, section.entries.len());
                if let Some(summary) = &section.summary {
                    println!("  {}", summary);
                }
                if !section.common.is_empty() {
                    println!("  ({})", section.common.join(", "));
                }
                for entry in &section.entries {
                    println!("  {}. {} [{}]", entry.position, entry.title, entry.file_name);
                }
            }
            println!();
        }
    }
}

/// `YYYY-MM-DD` slice of a post date, falling back to the raw string.
fn short_date(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return String::new();
    };
    parse_date(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.chars().take(10).collect())
}

/// Long display form, e.g. `Sat May 14 2017 at 18:00:00`.
fn long_date(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return String::new();
    };
    parse_date(raw)
        .map(|dt| dt.format("%a %b %e %Y at %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Try the date shapes that appear in post headers, most specific first.
fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date_from_full_timestamp() {
        assert_eq!(
            short_date(Some("2017-05-14 18:00:00 -0400")),
            "2017-05-14"
        );
    }

    #[test]
    fn test_short_date_from_bare_date() {
        assert_eq!(short_date(Some("2020-02-29")), "2020-02-29");
    }

    #[test]
    fn test_short_date_falls_back_to_prefix() {
        assert_eq!(short_date(Some("not a date at all")), "not a date");
    }

    #[test]
    fn test_missing_date_renders_empty() {
        assert_eq!(short_date(None), "");
        assert_eq!(long_date(None), "");
    }

    #[test]
    fn test_parse_date_rfc3339() {
        assert!(parse_date("2020-01-01T12:00:00Z").is_some());
    }
}
