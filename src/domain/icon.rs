use std::fs;
use std::path::Path;

use thiserror::Error;

/// Why a set of bytes could not become an [`Icon`].
#[derive(Error, Debug)]
pub enum IconError {
    #[error("empty resource")]
    Empty,

    #[error("unrecognised image format")]
    UnknownFormat,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A downloaded icon resource.
///
/// `mime` and `ext` always come from sniffing `data`, never from the link or
/// file name the bytes were loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    source: String,
    data: Vec<u8>,
    mime: String,
    ext: String,
}

impl Icon {
    pub(crate) fn new(source: String, data: Vec<u8>, mime: String, ext: String) -> Self {
        Self {
            source,
            data,
            mime,
            ext,
        }
    }

    /// Build an icon from raw bytes, sniffing the image format from content.
    pub fn from_bytes(source: impl Into<String>, data: Vec<u8>) -> Result<Self, IconError> {
        let (mime, ext) = sniff(&data)?;
        Ok(Self::new(source.into(), data, mime, ext))
    }

    /// Instantiate an icon from the local file system.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        Self::from_bytes(path.display().to_string(), data)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        fs::write(path, &self.data)
    }
}

/// Detect MIME type and canonical extension from magic bytes.
fn sniff(data: &[u8]) -> Result<(String, String), IconError> {
    if data.is_empty() {
        return Err(IconError::Empty);
    }
    let format = image::guess_format(data).map_err(|_| IconError::UnknownFormat)?;
    let ext = format
        .extensions_str()
        .first()
        .copied()
        .ok_or(IconError::UnknownFormat)?;
    Ok((format.to_mime_type().to_string(), ext.to_string()))
}
