use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::app::logger::{truncate, Logger};
use crate::domain::link::{embedded_payload, is_embedded};
use crate::domain::{Icon, IconError};
use crate::fetcher::{FetchError, Fetcher};

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("embedded link has no base64 payload")]
    MissingPayload,

    #[error(transparent)]
    Icon(#[from] IconError),
}

/// What one download task reports back to the collector.
struct Outcome {
    index: usize,
    link: String,
    result: Result<Icon, DownloadError>,
}

/// Downloads candidate icons concurrently, one task per link.
pub struct IconDownloader {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    logger: Arc<dyn Logger>,
}

impl IconDownloader {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, logger: Arc<dyn Logger>) -> Self {
        Self { fetcher, logger }
    }

    pub async fn download_one(&self, link: &str) -> Result<Icon, DownloadError> {
        download_icon(self.fetcher.as_ref(), link).await
    }

    /// Download every link and return the ones that succeeded.
    ///
    /// Failures are logged and skipped; they never cancel sibling tasks.
    /// The returned order is whatever order the tasks finished in.
    pub async fn download_all(&self, links: Vec<String>) -> Vec<Icon> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
        let mut handles = Vec::with_capacity(links.len());

        for (index, link) in links.into_iter().enumerate() {
            let fetcher = self.fetcher.clone();
            let tx = tx.clone();

            let handle = tokio::spawn(async move {
                let result = download_icon(fetcher.as_ref(), &link).await;
                let _ = tx.send(Outcome {
                    index,
                    link,
                    result,
                });
            });

            handles.push((index, handle));
        }
        // The channel closes once the last task drops its sender.
        drop(tx);

        let mut icons = Vec::new();
        while let Some(outcome) = rx.recv().await {
            match outcome.result {
                Ok(icon) => icons.push(icon),
                Err(e) => self.logger.log(&format!(
                    "download failed for {}: {}: {}",
                    outcome.index,
                    truncate(&outcome.link),
                    truncate(&e.to_string())
                )),
            }
        }

        for (index, handle) in handles {
            if let Err(e) = handle.await {
                tracing::error!("Task join error: {}", e);
                self.logger.log(&format!("download failed for {}: {}", index, e));
            }
        }

        tracing::debug!("downloaded {} icons", icons.len());
        icons
    }
}

/// Fetch the icon behind `link`, or decode it when the link embeds it.
pub async fn download_icon(
    fetcher: &(dyn Fetcher + Send + Sync),
    link: &str,
) -> Result<Icon, DownloadError> {
    let data = if is_embedded(link) {
        let payload = embedded_payload(link).ok_or(DownloadError::MissingPayload)?;
        BASE64.decode(payload.trim())?
    } else {
        fetcher.fetch(link).await?
    };
    Ok(Icon::from_bytes(link, data)?)
}
