//! # post-harness CLI (`posts`)
//!
//! The `posts` binary exercises the ingestion engine end to end: every
//! command runs a fresh ingestion of the configured corpus and renders one
//! view of the resulting bundle.
//!
//! ```bash
//! posts --config ./config/posts.toml <command>
//! ```
//!
//! | Command | Description |
//! |---------|-------------|
//! | `posts sources` | Show the configured post source |
//! | `posts ingest` | Ingest the corpus and print a summary |
//! | `posts list` | List every post, newest first |
//! | `posts show <file-name>` | Print one post's header and body |
//! | `posts series` | Render the series sections |
//! | `posts tags` | Render the grouped tag sections |

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use post_harness::config;
use post_harness::ingest;
use post_harness::listing::{self, SegmentView};
use post_harness::sources;

/// The `posts` CLI: ingest frontmatter blog posts and render their indices.
#[derive(Parser)]
#[command(
    name = "posts",
    about = "post-harness: a connector-driven ingestion and indexing engine for frontmatter blog posts",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/posts.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Show the configured post source and its status.
    Sources,

    /// Ingest the corpus and print a summary.
    ///
    /// Lists identifiers from the configured source, fetches and parses all
    /// of them concurrently, and reports how many posts made it into the
    /// bundle. Documents that fail to fetch or parse are logged and skipped.
    Ingest {
        /// Maximum number of files to process.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List every post, newest first.
    List,

    /// Print one post's header fields and body.
    Show {
        /// Post identifier (file name without `.md`).
        file_name: String,
    },

    /// Render the series sections with part numbering.
    Series,

    /// Render the tag sections, bucketed into configured groups.
    Tags,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Sources => {
            sources::list_sources(&cfg)?;
        }
        Commands::Ingest { limit } => {
            ingest::run_ingest(&cfg, limit).await?;
        }
        Commands::List => {
            listing::run_list(&cfg).await?;
        }
        Commands::Show { file_name } => {
            listing::run_show(&cfg, &file_name).await?;
        }
        Commands::Series => {
            listing::run_segments(&cfg, SegmentView::Series).await?;
        }
        Commands::Tags => {
            listing::run_segments(&cfg, SegmentView::Tags).await?;
        }
    }

    Ok(())
}
