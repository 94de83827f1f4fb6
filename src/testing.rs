//! Fakes and fixtures shared by the unit tests.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{ImageFormat, RgbaImage};

use crate::app::Logger;
use crate::fetcher::{FetchError, Fetcher};

/// Serves canned bodies by exact URL; anything else fails.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    routes: HashMap<String, Vec<u8>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.to_string(), body.into());
        self
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable(format!("no route for {url}")))
    }
}

#[derive(Debug, Default)]
pub struct CollectingLogger {
    messages: Mutex<Vec<String>>,
}

impl CollectingLogger {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Logger for CollectingLogger {
    fn log(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    RgbaImage::new(width, height)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

pub fn embed_png(data: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(data))
}
