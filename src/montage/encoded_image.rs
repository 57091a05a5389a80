// SPDX-License-Identifier: MPL-2.0
//! Self-describing image payloads.
//!
//! An [`EncodedImage`] is the raw file content of an image together with its
//! media type. It is what the uploaders produce, what the generation service
//! consumes and returns, and what the result panel renders and saves.
//!
//! The declared media type of a file on disk comes from its extension, which
//! mirrors how a browser fills `File.type`. Files whose declared type is not an
//! `image/*` type never become an `EncodedImage`.

use crate::error::Result;
use iced::widget::image::Handle;
use image_rs::ImageFormat;
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Prefix every accepted media type starts with.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Media type used for saved montages.
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// Extensions offered by the open-file dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "webp", "gif", "bmp", "tiff", "tif", "ico",
];

/// Returns the media type a file declares through its extension, if any.
#[must_use]
pub fn declared_media_type(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

/// Returns `true` when a media type names an image.
#[must_use]
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// Image bytes plus the media type describing them.
#[derive(Clone)]
pub struct EncodedImage {
    media_type: String,
    bytes: Arc<Vec<u8>>,
    handle: Handle,
}

impl EncodedImage {
    /// Wraps raw bytes. Returns `None` unless `media_type` is an image type.
    #[must_use]
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        let media_type = media_type.into();
        if !is_image_media_type(&media_type) {
            return None;
        }
        let handle = Handle::from_bytes(bytes.clone());
        Some(Self {
            media_type,
            bytes: Arc::new(bytes),
            handle,
        })
    }

    /// Reads an image file from disk.
    ///
    /// Returns `Ok(None)` without touching the file when its declared media
    /// type is not an image type.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn read_path(path: PathBuf) -> Result<Option<Self>> {
        let Some(media_type) = declared_media_type(&path) else {
            return Ok(None);
        };
        if !is_image_media_type(media_type) {
            return Ok(None);
        }

        let bytes = tokio::fs::read(&path).await?;
        Ok(Self::new(media_type, bytes))
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Handle for rendering with Iced image widgets.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn is_png(&self) -> bool {
        self.media_type == PNG_MEDIA_TYPE
    }

    /// Returns the image encoded as PNG, transcoding when needed.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-PNG payload cannot be decoded or re-encoded.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        if self.is_png() {
            return Ok(self.bytes.as_ref().clone());
        }

        let decoded = image_rs::load_from_memory(&self.bytes)?;
        let mut out = Cursor::new(Vec::new());
        decoded.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Writes the image to `path` as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if transcoding or writing fails.
    pub async fn save_png(&self, path: PathBuf) -> Result<()> {
        let png = self.to_png()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&path, png).await?;
        Ok(())
    }
}

impl PartialEq for EncodedImage {
    fn eq(&self, other: &Self) -> bool {
        self.media_type == other.media_type && self.bytes == other.bytes
    }
}

impl Eq for EncodedImage {}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn encode(format: ImageFormat) -> Vec<u8> {
        let img = RgbaImage::from_pixel(3, 2, Rgba([200, 10, 10, 255]));
        let mut out = Cursor::new(Vec::new());
        image_rs::DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .write_to(&mut out, format)
            .expect("encode test image");
        out.into_inner()
    }

    #[test]
    fn declared_media_type_follows_extension() {
        assert_eq!(declared_media_type(Path::new("a.png")), Some("image/png"));
        assert_eq!(declared_media_type(Path::new("b.JPG")), Some("image/jpeg"));
        assert_eq!(declared_media_type(Path::new("notes.txt")), None);
        assert_eq!(declared_media_type(Path::new("no_extension")), None);
    }

    #[test]
    fn new_rejects_non_image_media_types() {
        assert!(EncodedImage::new("text/plain", vec![1, 2, 3]).is_none());
        assert!(EncodedImage::new("application/octet-stream", vec![]).is_none());
        assert!(EncodedImage::new("image/webp", vec![1]).is_some());
    }

    #[test]
    fn equality_ignores_render_handle() {
        let a = EncodedImage::new("image/png", vec![1, 2, 3]).unwrap();
        let b = EncodedImage::new("image/png", vec![1, 2, 3]).unwrap();
        let c = EncodedImage::new("image/jpeg", vec![1, 2, 3]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn read_path_loads_image_files() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("subject.png");
        let bytes = encode(ImageFormat::Png);
        std::fs::write(&path, &bytes).expect("write png");

        let image = EncodedImage::read_path(path)
            .await
            .expect("read succeeds")
            .expect("png is accepted");
        assert_eq!(image.media_type(), "image/png");
        assert_eq!(image.bytes(), bytes.as_slice());
    }

    #[tokio::test]
    async fn read_path_ignores_non_image_files() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").expect("write txt");

        let image = EncodedImage::read_path(path).await.expect("no I/O error");
        assert!(image.is_none());
    }

    #[tokio::test]
    async fn read_path_does_not_touch_missing_non_image_files() {
        let image = EncodedImage::read_path(PathBuf::from("/nonexistent/readme.md"))
            .await
            .expect("non-image paths are skipped before reading");
        assert!(image.is_none());
    }

    #[tokio::test]
    async fn read_path_reports_missing_image_files() {
        let result = EncodedImage::read_path(PathBuf::from("/nonexistent/scene.png")).await;
        assert!(result.is_err());
    }

    #[test]
    fn to_png_passes_png_through() {
        let bytes = encode(ImageFormat::Png);
        let image = EncodedImage::new("image/png", bytes.clone()).unwrap();
        assert_eq!(image.to_png().unwrap(), bytes);
    }

    #[test]
    fn to_png_transcodes_other_formats() {
        let image = EncodedImage::new("image/jpeg", encode(ImageFormat::Jpeg)).unwrap();
        let png = image.to_png().expect("transcode");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn save_png_writes_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out").join("montage.png");
        let image = EncodedImage::new("image/png", encode(ImageFormat::Png)).unwrap();

        image.save_png(path.clone()).await.expect("save");
        assert_eq!(std::fs::read(path).unwrap(), image.bytes());
    }
}
