//! Image ingestion codec.
//!
//! Uploads are checked against their declared content type, decoded, cropped
//! to a fixed square and re-encoded as JPEG. The codec is stateless apart from
//! its settings and can be shared freely between request handlers.

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use serde::Deserialize;
use thiserror::Error;

/// Media type of every image produced by [`ImageCodec::encode`].
pub const OUTPUT_MEDIA_TYPE: &str = "image/jpeg";

const IMAGE_CONTENT_TYPE_PREFIX: &str = "image";

/// Errors produced while turning an upload into a stored image.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The declared content type does not start with `image`.
    #[error("invalid content type: {0:?}")]
    InvalidContentType(String),
    /// The upload is larger than the configured limit.
    #[error("image is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
    /// The bytes are not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(String),
    /// The resized image could not be re-encoded.
    #[error("failed to encode image: {0}")]
    Encode(String),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Output geometry, quality and input limit of the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecSettings {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// JPEG quality, 1-100.
    pub quality: u8,
    /// Largest accepted upload in bytes.
    pub max_upload_bytes: usize,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            quality: 75,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

/// A re-encoded image ready to be stored.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
}

impl std::fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedImage")
            .field("len", &self.bytes.len())
            .field("media_type", &self.media_type)
            .finish()
    }
}

/// Decode, resize and re-encode uploaded images.
#[derive(Debug, Clone, Default)]
pub struct ImageCodec {
    settings: CodecSettings,
}

impl ImageCodec {
    pub fn new(settings: CodecSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    /// Media type of the images this codec produces.
    pub fn media_type(&self) -> &'static str {
        OUTPUT_MEDIA_TYPE
    }

    /// Turn raw upload bytes into a stored-ready image.
    ///
    /// The content type is checked before anything else; data that fails the
    /// check is never decoded.
    pub fn encode(&self, raw: &[u8], content_type: &str) -> CodecResult<EncodedImage> {
        if !is_image_content_type(content_type) {
            return Err(CodecError::InvalidContentType(content_type.to_string()));
        }

        let limit = self.settings.max_upload_bytes;
        if raw.len() > limit {
            return Err(CodecError::TooLarge {
                size: raw.len(),
                limit,
            });
        }

        let decoded = image::load_from_memory(raw).map_err(|e| CodecError::Decode(e.to_string()))?;

        let resized = decoded.resize_to_fill(
            self.settings.width,
            self.settings.height,
            FilterType::Lanczos3,
        );

        // JPEG has no alpha channel.
        let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, self.settings.quality.clamp(1, 100));
        rgb.write_with_encoder(encoder)
            .map_err(|e| CodecError::Encode(e.to_string()))?;

        Ok(EncodedImage {
            bytes,
            media_type: OUTPUT_MEDIA_TYPE,
        })
    }
}

fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX)
}
