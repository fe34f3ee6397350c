use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn posts_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("posts");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let posts_dir = root.join("posts");
    fs::create_dir_all(&posts_dir).unwrap();

    fs::write(
        posts_dir.join("ruby-cheat-sheet.md"),
        "layout: post\n\
         ---\n\
         title: \"Ruby Cheat Sheet\"\n\
         date: 2017-03-01 10:00:00 -0400\n\
         summary: Primary uses of Ruby\n\
         tags: Ruby, SQL\n\
         series: Language Cheat Sheet\n\
         ---\n\
         Ruby methods and 3 more things worth knowing.\n",
    )
    .unwrap();
    fs::write(
        posts_dir.join("js-cheat-sheet.md"),
        "layout: post\n\
         ---\n\
         title: \"JavaScript Cheat Sheet\"\n\
         date: 2017-05-14 18:00:00 -0400\n\
         summary: Primary uses of JavaScript\n\
         tags: JavaScript\n\
         series: Language Cheat Sheet\n\
         projects: weathercraft\n\
         ---\n\
         JavaScript iterations explained at length.\n",
    )
    .unwrap();
    fs::write(
        posts_dir.join("weathercraft-intro.md"),
        "layout: post\n\
         ---\n\
         title: \"Building WeatherCraft\"\n\
         date: 2018-01-20 09:30:00 -0400\n\
         tags: JavaScript, React\n\
         projects: weathercraft\n\
         ---\n\
         Lessons from my first major project.\n",
    )
    .unwrap();
    // Malformed on purpose: no frontmatter delimiters.
    fs::write(posts_dir.join("broken.md"), "just a stray file\n").unwrap();

    let config_content = format!(
        r#"[source.filesystem]
root = "{}/posts"

[layout]
columns = 3

[[tags.groups]]
name = "Programming Languages"
tags = ["JavaScript", "Ruby", "SQL"]

[tags.titles.JavaScript]
common = ["JS", "ECMAScript"]

[series.titles."Language Cheat Sheet"]
summary = "Primary and important uses of languages"
"#,
        root.display()
    );

    let config_path = root.join("posts.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_posts(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = posts_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run posts binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_sources_shows_filesystem_root() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_posts(&config_path, &["sources"]);
    assert!(success, "sources failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("filesystem"));
    assert!(stdout.contains("OK"));
}

#[test]
fn test_ingest_skips_malformed_and_counts() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_posts(&config_path, &["ingest"]);
    assert!(success, "ingest failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("listed: 4 files"));
    assert!(stdout.contains("indexed posts: 3"));
    assert!(stdout.contains("skipped: 1"));
    assert!(stdout.contains("ok"));
}

#[test]
fn test_ingest_limit_truncates() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_posts(&config_path, &["ingest", "--limit", "1"]);
    assert!(success);
    assert!(stdout.contains("listed: 1 files"));
}

#[test]
fn test_list_newest_first_with_series_parts() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_posts(&config_path, &["list"]);
    assert!(success, "list failed: stdout={}, stderr={}", stdout, stderr);

    let weathercraft = stdout.find("Building WeatherCraft").unwrap();
    let js = stdout.find("JavaScript Cheat Sheet").unwrap();
    let ruby = stdout.find("Ruby Cheat Sheet").unwrap();
    assert!(weathercraft < js && js < ruby, "wrong order:\n{}", stdout);

    // Cheat-sheet series parts follow publication order.
    assert!(stdout.contains("Language Cheat Sheet - Part 1"));
    assert!(stdout.contains("Language Cheat Sheet - Part 2"));
    assert!(stdout.contains("3 posts"));
}

#[test]
fn test_show_renders_header_and_body() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_posts(&config_path, &["show", "js-cheat-sheet"]);
    assert!(success);
    assert!(stdout.contains("title:    JavaScript Cheat Sheet"));
    assert!(stdout.contains("series:   Language Cheat Sheet - Part 2"));
    assert!(stdout.contains("projects: weathercraft"));
    assert!(stdout.contains("layout: post"));
    assert!(stdout.contains("JavaScript iterations explained at length."));
}

#[test]
fn test_show_unknown_post_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_posts(&config_path, &["show", "no-such-post"]);
    assert!(!success);
    assert!(stderr.contains("post not found"));
}

#[test]
fn test_tags_groups_and_synonyms() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_posts(&config_path, &["tags"]);
    assert!(success, "tags failed: stdout={}, stderr={}", stdout, stderr);

    // Configured group header first, implicit Other last.
    let languages = stdout.find("== Programming Languages").unwrap();
    let other = stdout.find("== Other").unwrap();
    assert!(languages < other);

    // JavaScript spans two posts; its synonym annotation renders.
    assert!(stdout.contains("JavaScript (2)"));
    assert!(stdout.contains("(JS, ECMAScript)"));
    // React is unassigned, so it lands in Other.
    let react = stdout.find("React (1)").unwrap();
    assert!(react > other);
}

#[test]
fn test_series_headerless_with_summary() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_posts(&config_path, &["series"]);
    assert!(success);
    // No groups configured for series: single bucket, no group headers.
    assert!(!stdout.contains("== "));
    assert!(stdout.contains("Language Cheat Sheet (2)"));
    assert!(stdout.contains("Primary and important uses of languages"));
    assert!(stdout.contains("1. Ruby Cheat Sheet"));
    assert!(stdout.contains("2. JavaScript Cheat Sheet"));
}

#[test]
fn test_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("absent.toml");
    let (_, _, success) = run_posts(&config_path, &["ingest"]);
    assert!(!success);
}
