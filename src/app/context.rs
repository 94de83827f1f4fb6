use std::sync::Arc;

use crate::app::error::{PageIconError, Result};
use crate::app::logger::{Logger, TracingLogger};
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::pipeline::PageIcon;

pub struct AppContext {
    pub config: Config,
    pub page_icon: PageIcon,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(
            HttpFetcher::new(&config.fetcher).map_err(PageIconError::Client)?,
        );
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        Ok(Self::with_parts(config, fetcher, logger))
    }

    pub fn with_parts(
        config: Config,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let page_icon = PageIcon::new(fetcher, logger);
        Self { config, page_icon }
    }
}
