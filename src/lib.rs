//! # post-harness
//!
//! A connector-driven ingestion and indexing engine for frontmatter blog
//! posts.
//!
//! Posts live as Markdown files with a small `key: value` frontmatter
//! header, either in a local directory or in a GitHub repository tree. One
//! ingestion run fetches and parses the whole corpus concurrently,
//! tolerating per-document failures, and produces an [`index::IndexBundle`]:
//! the post-by-id map plus tag, series, and project indices. The
//! [`layout`] module turns an index slice and a static grouping
//! configuration into the row layout used by the tag and series views.
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌─────────────┐
//! │   Sources   │──▶│ Fetch+Parse  │──▶│ IndexBundle │
//! │  FS/GitHub  │   │ (concurrent) │   │ (in memory) │
//! └─────────────┘   └──────────────┘   └──────┬──────┘
//!                                             │
//!                              ┌──────────────┤
//!                              ▼              ▼
//!                        ┌──────────┐  ┌─────────────┐
//!                        │   CLI    │  │   Section   │
//!                        │ (posts)  │  │   layout    │
//!                        └──────────┘  └─────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | The [`models::Post`] record |
//! | [`words`] | Body word counting |
//! | [`frontmatter`] | Raw text → [`models::Post`] |
//! | [`index`] | Index bundle and merge |
//! | [`sources`] | Post source trait and resolution |
//! | [`source_fs`] | Local directory source |
//! | [`source_github`] | GitHub repository tree source |
//! | [`ingest`] | Concurrent ingestion orchestration |
//! | [`layout`] | Section grouping and row layout |
//! | [`listing`] | CLI rendering of the bundle |

pub mod config;
pub mod frontmatter;
pub mod index;
pub mod ingest;
pub mod layout;
pub mod listing;
pub mod models;
pub mod source_fs;
pub mod source_github;
pub mod sources;
pub mod words;
