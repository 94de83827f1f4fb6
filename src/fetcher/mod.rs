pub mod http_fetcher;

use async_trait::async_trait;
use thiserror::Error;

pub use http_fetcher::HttpFetcher;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Unavailable(String),
}

/// Retrieves the raw bytes behind a URL.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
