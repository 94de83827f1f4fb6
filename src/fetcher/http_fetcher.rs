use async_trait::async_trait;
use reqwest::Client;

use crate::config::FetcherConfig;
use crate::fetcher::{FetchError, Fetcher};

pub struct HttpFetcher {
    client: Client,
    fail_on_http_error: bool,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().gzip(true).brotli(true);

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self {
            client: builder.build()?,
            fail_on_http_error: config.fail_on_http_error,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        // Without the opt-in, error pages are handed back as content.
        if self.fail_on_http_error {
            response.error_for_status_ref()?;
        }

        let body = response.bytes().await?.to_vec();
        Ok(body)
    }
}
