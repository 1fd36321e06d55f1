//! Selected File
//!
//! The image the user picked or dropped, with the media type a browser
//! would have reported for it.

use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use bytes::Bytes;
use image::{ImageFormat, ImageReader};

use crate::error::{ClassifyError, ClassifyResult};

/// Media type used when neither the name nor the content identify the file.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// File extensions offered in the picker dialog.
///
/// Every entry must have its `image` decoder feature enabled, otherwise
/// [`SelectedFile::dimensions`] cannot read the header.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// A file handed to the widget, held in memory.
///
/// Cloning is cheap: the contents are reference counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    bytes: Bytes,
}

impl SelectedFile {
    /// Build from an in-memory payload (drag and drop, tests).
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let name = name.into();
        let bytes = bytes.into();
        let media_type = detect_media_type(&name, &bytes);
        Self {
            name,
            media_type,
            bytes,
        }
    }

    /// Read a file from disk.
    pub async fn load(path: impl AsRef<Path>) -> ClassifyResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        tracing::debug!("Loaded {} ({} bytes)", name, bytes.len());
        Ok(Self::from_bytes(name, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the media type is `image/*`
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    /// Reject anything that is not an image.
    pub fn ensure_image(&self) -> ClassifyResult<()> {
        if self.is_image() {
            Ok(())
        } else {
            Err(ClassifyError::InvalidFileType {
                name: self.name.clone(),
                media_type: self.media_type.clone(),
            })
        }
    }

    /// Base64 data URI for the preview `img`
    pub fn preview_data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.media_type, encoded)
    }

    /// Pixel dimensions, read from the header only.
    ///
    /// `None` for formats the decoder does not know or truncated headers.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        ImageReader::new(Cursor::new(self.bytes.as_ref()))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }
}

/// Extension first (what a browser reports), then magic bytes.
fn detect_media_type(name: &str, bytes: &[u8]) -> String {
    let from_name = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageFormat::from_extension);

    match from_name.or_else(|| image::guess_format(bytes).ok()) {
        Some(format) => format.to_mime_type().to_string(),
        None => FALLBACK_MEDIA_TYPE.to_string(),
    }
}
