use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_SEARCH_URL: &str = "https://search.azlyrics.com/search.php";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Look up song lyrics and read them in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "lyrics-finder", version, about)]
pub struct Args {
    /// Artist name
    #[arg(long)]
    pub artist: String,

    /// Song name
    #[arg(long)]
    pub song: String,

    /// Search endpoint queried with `q=<song> <artist>`
    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Write diagnostics to this file (nothing is logged otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `lyrics_finder=trace`
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}
