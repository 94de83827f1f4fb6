use thiserror::Error;

use crate::config::ConfigError;
use crate::extractor::ParseError;
use crate::fetcher::FetchError;

#[derive(Error, Debug)]
pub enum PageIconError {
    #[error("fetching url: {0}")]
    Fetch(#[from] FetchError),

    #[error("parsing document: {0}")]
    Parse(#[from] ParseError),

    #[error("no links found")]
    NoLinksFound,

    #[error("no valid icons")]
    NoIconsDownloaded,

    #[error("no best icon")]
    NoBestIcon,

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] FetchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PageIconError {
    /// True for the outcomes where the page simply had nothing usable.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoLinksFound | Self::NoIconsDownloaded)
    }
}

pub type Result<T> = std::result::Result<T, PageIconError>;
