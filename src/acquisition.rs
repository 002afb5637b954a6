//! Image loading: turns files or raw bytes into RGBA pixel buffers for the detector.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

use crate::models::PixelBuffer;

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image data is empty")]
    EmptyData,

    #[error("Unsupported image format")]
    UnsupportedFormat,

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),
}

/// Decode raw image bytes (PNG, JPEG, ...) into an RGBA buffer
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer, AcquireError> {
    if bytes.is_empty() {
        return Err(AcquireError::EmptyData);
    }

    let format = detect_format(bytes)?;
    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| AcquireError::DecodeFailed(e.to_string()))?;

    tracing::debug!(?format, width = img.width(), height = img.height(), "decoded image");
    Ok(PixelBuffer::from_dynamic(&img))
}

/// Detect image format from magic bytes
pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat, AcquireError> {
    image::guess_format(bytes).map_err(|_| AcquireError::UnsupportedFormat)
}

pub fn load_path(path: impl AsRef<Path>) -> Result<PixelBuffer, AcquireError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| AcquireError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_bytes(&bytes)
}

/// Read the file without blocking the runtime, then decode
pub async fn load_path_async(path: impl AsRef<Path>) -> Result<PixelBuffer, AcquireError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| AcquireError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_bytes(&bytes)
}
