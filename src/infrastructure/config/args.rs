use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "oxisplash",
    version,
    about = "A lightweight Unsplash photo browser for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Unsplash API client id.
    #[arg(long, env = "UNSPLASH_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Unsplash API base URL.
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Favorites database path.
    #[arg(long, value_name = "PATH")]
    pub database_path: Option<PathBuf>,

    /// Download directory.
    #[arg(long, value_name = "PATH")]
    pub download_dir: Option<PathBuf>,

    /// Enable desktop notifications.
    #[arg(long)]
    pub enable_desktop_notifications: Option<bool>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// One screen-worth of work per invocation.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List photos from the editorial feed.
    List {
        /// Last page to load; pages accumulate from 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Search photos by free-text query.
    Search {
        /// The query.
        query: String,
        /// Last page to load; pages accumulate from 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show locally favorited photos.
    Favorites,
    /// Mark a photo as favorite.
    Favorite {
        /// Photo id.
        id: String,
    },
    /// Remove a photo from favorites.
    Unfavorite {
        /// Photo id.
        id: String,
    },
    /// Show one photo's details.
    Show {
        /// Photo id.
        id: String,
    },
    /// Download a photo's full-resolution file.
    Download {
        /// Photo id.
        id: String,
    },
}
