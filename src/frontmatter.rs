//! Frontmatter parsing.
//!
//! A post file is free preamble text, a `---` delimiter, a block of
//! `key: value` header lines, a second `---` delimiter, and the body.
//! Everything after the second delimiter is body verbatim; further `---`
//! occurrences are content, not structure.
//!
//! Header lines split at the first `": "`. Lines without one, or whose
//! value trims to nothing, are skipped silently: absent optional fields are
//! not an error. Recognized keys get field-specific transforms; anything
//! else lands in [`Post::extra`] untouched.

use anyhow::{bail, Result};

use crate::models::Post;
use crate::words::count_words;

/// Frontmatter block delimiter.
const DELIMITER: &str = "---";

/// Parse one raw document into a [`Post`].
///
/// The caller assigns `file_name` from the source listing; the parser only
/// sees text. Returns an error when the two delimiters cannot be found;
/// the orchestrator turns that into "absent from the bundle".
pub fn parse_post(file_name: &str, raw: &str) -> Result<Post> {
    let mut sections = raw.splitn(3, DELIMITER);
    let (headers, body) = match (sections.next(), sections.next(), sections.next()) {
        (Some(_preamble), Some(headers), Some(body)) => (headers, body),
        _ => bail!("missing frontmatter delimiters in '{}'", file_name),
    };

    let mut post = Post::new(file_name);
    post.body = body.to_string();
    post.words = count_words(body);

    for line in headers.lines() {
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match key {
            "title" => post.title = Some(strip_quotes(value)),
            "subtitle" => post.subtitle = Some(strip_quotes(value)),
            "date" => post.date = Some(value.to_string()),
            "summary" => post.summary = Some(value.to_string()),
            "tags" => post.tags = Some(value.to_string()),
            "series" => post.series = Some(value.to_string()),
            "projects" => post.projects = split_list(value),
            other => {
                post.extra.insert(other.to_string(), value.to_string());
            }
        }
    }

    Ok(post)
}

/// Split a comma-space separated header value into its items.
///
/// Shared by the parser (`projects`) and the index builder (`tags`,
/// `series` fan-out).
pub fn split_list(value: &str) -> Vec<String> {
    value.split(", ").map(str::to_string).collect()
}

fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}
