use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::cli::{Args, DEFAULT_LOG_LEVEL, DEFAULT_SEARCH_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{Error, Result};

pub const USER_AGENT: &str = concat!("lyrics-finder/", env!("CARGO_PKG_VERSION"));

/// Settings for one run, built once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub artist: String,
    pub song: String,
    pub search_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Config with defaults for everything but the query.
    pub fn new(artist: &str, song: &str) -> Result<Self> {
        let search_url = Url::parse(DEFAULT_SEARCH_URL)
            .map_err(|e| Error::Usage(format!("invalid search url: {e}")))?;
        Self::build(artist, song, search_url)
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let search_url = Url::parse(&args.search_url)
            .map_err(|e| Error::Usage(format!("invalid --search-url {:?}: {e}", args.search_url)))?;
        if args.timeout == 0 {
            return Err(Error::Usage("--timeout must be at least 1 second".into()));
        }

        let mut config = Self::build(&args.artist, &args.song, search_url)?;
        config.timeout = Duration::from_secs(args.timeout);
        config.log_file = args.log_file.clone();
        config.log_level = args.log_level.clone();
        Ok(config)
    }

    fn build(artist: &str, song: &str, search_url: Url) -> Result<Self> {
        let artist = artist.trim();
        let song = song.trim();
        if artist.is_empty() || song.is_empty() {
            return Err(Error::Usage("missing artist/song info".into()));
        }

        Ok(Self {
            artist: artist.to_string(),
            song: song.to_string(),
            search_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        })
    }

    /// Search page URL with `q` set to `"<song> <artist>"`.
    ///
    /// Other query pairs on the endpoint are kept; an existing `q` is replaced.
    pub fn search_target(&self) -> Url {
        let mut target = self.search_url.clone();
        let kept: Vec<(String, String)> = target
            .query_pairs()
            .filter(|(k, _)| k != "q")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        target
            .query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("q", &format!("{} {}", self.song, self.artist));
        target
    }
}
