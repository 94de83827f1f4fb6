//! # pageicon
//!
//! Finds the best icon for a website from the icons its HTML advertises.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Extractor → Resolver → Downloader → Selector
//! ```
//!
//! - [`fetcher`]: raw byte retrieval, pluggable for tests
//! - [`extractor`]: streaming scan of `<link>` and `<meta>` tags
//! - [`resolver`]: turns relative links into absolute URLs
//! - [`downloader`]: concurrent download with per-link failure tolerance
//! - [`selector`]: picks one icon by extension preference and size
//! - [`pipeline`]: the `list` and `infer` entry points
//!
//! ## Quick Start
//!
//! ```bash
//! # List the icon links a page declares
//! pageicon github.com
//!
//! # Download them and keep the best PNG
//! pageicon github.com --prefer png,ico --output github.png
//! ```

/// Application context, error types and the logger capability.
///
/// The [`AppContext`](app::AppContext) struct wires the default HTTP fetcher
/// and tracing logger into a [`PageIcon`](pipeline::PageIcon).
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/pageicon/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Icon`](domain::Icon): downloaded image bytes with sniffed type
/// - [`link`](domain::link): data-URI detection
pub mod domain;

/// Concurrent icon download.
pub mod downloader;

/// Icon link extraction from HTML.
pub mod extractor;

/// Resource fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for byte retrieval
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// The list/infer pipeline.
pub mod pipeline;

/// URL resolution against the page's host.
pub mod resolver;

/// Best-icon selection.
pub mod selector;

#[cfg(test)]
mod testing;

pub use app::{Logger, PageIconError, Result};
pub use domain::{Icon, IconError};
pub use fetcher::{FetchError, Fetcher};
pub use pipeline::PageIcon;
