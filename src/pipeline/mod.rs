use std::sync::Arc;

use crate::app::logger::{truncate, Logger};
use crate::app::{PageIconError, Result};
use crate::domain::{is_embedded, Icon};
use crate::downloader::IconDownloader;
use crate::extractor::extract_links;
use crate::fetcher::Fetcher;
use crate::resolver::resolve;
use crate::selector::select_best;

/// Finds the icons a web page advertises and picks the best one.
pub struct PageIcon {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    logger: Arc<dyn Logger>,
    downloader: IconDownloader,
}

impl PageIcon {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, logger: Arc<dyn Logger>) -> Self {
        let downloader = IconDownloader::new(fetcher.clone(), logger.clone());
        Self {
            fetcher,
            logger,
            downloader,
        }
    }

    /// List every icon link found on the page at `url`, resolved to absolute URLs.
    ///
    /// Embedded data-URIs are returned verbatim.
    pub async fn list(&self, url: &str) -> Result<Vec<String>> {
        let body = self.fetcher.fetch(url).await?;
        icon_links(url, &body)
    }

    /// Download every icon the page links to and return the best match for
    /// `preference`.
    pub async fn infer<S: AsRef<str>>(&self, url: &str, preference: &[S]) -> Result<Icon> {
        let links = self.list(url).await?;
        self.logger.log(&format!("parsed links: {}", format_links(&links)));
        if links.is_empty() {
            return Err(PageIconError::NoLinksFound);
        }

        let icons = self.downloader.download_all(links).await;
        if icons.is_empty() {
            return Err(PageIconError::NoIconsDownloaded);
        }
        self.logger.log("icons downloaded");

        let icon = select_best(icons, preference).ok_or(PageIconError::NoBestIcon)?;
        self.logger.log(&format!("best icon: {}", truncate(icon.source())));
        Ok(icon)
    }
}

fn icon_links(root: &str, document: &[u8]) -> Result<Vec<String>> {
    let links = extract_links(document)?
        .into_iter()
        .map(|link| {
            if is_embedded(&link) {
                link
            } else {
                resolve(root, &link)
            }
        })
        .filter(|link| !link.is_empty())
        .collect();
    Ok(links)
}

fn format_links(links: &[String]) -> String {
    let lines: Vec<String> = links
        .iter()
        .map(|link| format!("\n\t{}", truncate(link)))
        .collect();
    format!("[{}\n]", lines.join(","))
}
