//! Core data model for post-harness.
//!
//! A [`Post`] is one parsed blog document: the frontmatter fields plus the
//! raw body and its derived word count. Posts flow from a source through the
//! frontmatter parser into the index bundle.

use std::collections::BTreeMap;

/// One parsed blog post.
///
/// `file_name` is the stable corpus-wide identifier, assigned by the caller
/// from the source listing (the frontmatter itself does not know it).
/// Recognized fields that are absent from the header are `None`; the parser
/// never validates; anomalies surface at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub file_name: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Raw date string from the header, kept verbatim for display; parsed
    /// lazily where sorting or short-formatting needs it.
    pub date: Option<String>,
    pub summary: Option<String>,
    /// Comma-space separated display string, e.g. `"Ruby, Rails, SQL"`.
    /// The same items are fanned out into the tag index at merge time.
    pub tags: Option<String>,
    /// Series display string; also fanned out into the series index.
    pub series: Option<String>,
    pub projects: Vec<String>,
    /// Unrecognized header keys, stored verbatim. Consumed by no index.
    pub extra: BTreeMap<String, String>,
    /// Everything after the closing frontmatter delimiter, verbatim.
    pub body: String,
    pub words: usize,
}

impl Post {
    /// An empty post shell for the given identifier. The parser fills in
    /// whatever the header actually provides.
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            title: None,
            subtitle: None,
            date: None,
            summary: None,
            tags: None,
            series: None,
            projects: Vec::new(),
            extra: BTreeMap::new(),
            body: String::new(),
            words: 0,
        }
    }
}
