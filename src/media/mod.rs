// SPDX-License-Identifier: MPL-2.0
//! Media identifiers, classification and loaded media handles.
//!
//! Every gallery item is addressed by a [`SourceId`]. Its extension decides
//! whether it is loaded as a video (`.mp4`, `.webm`) or as an image (anything
//! else). Loaded resources are represented by [`MediaHandle`], which is what the
//! preload cache stores and what the lightbox displays.

pub mod image;
pub mod loader;
pub mod preload;
pub mod video;

use std::fmt;
use std::sync::Arc;

pub use extensions::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
pub use image::ImageData;
pub use loader::{FileLoader, MediaLoader};
pub use preload::{PreloadCache, PreloadOutcome, PreloadStats};
pub use video::VideoData;

/// Locator of a gallery item (relative path, absolute path or URL-like string).
///
/// Cheap to clone; used as the cache key and to find an item's position in the
/// gallery list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(Arc<str>);

impl SourceId {
    #[must_use]
    pub fn new(locator: impl AsRef<str>) -> Self {
        Self(Arc::from(locator.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the extension of the last path segment, ignoring any query
    /// string or fragment.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let path = self.0.split(['?', '#']).next().unwrap_or_default();
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }

    /// Returns the last path segment, for display purposes.
    #[must_use]
    pub fn file_name(&self) -> &str {
        let path = self.0.split(['?', '#']).next().unwrap_or_default();
        path.rsplit(['/', '\\']).next().unwrap_or(path)
    }

    /// Classifies this source by extension.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        MediaKind::of(self)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SourceId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

/// Represents different types of media formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Videos are recognized by extension; everything else is treated as an image.
    #[must_use]
    pub fn of(source: &SourceId) -> Self {
        match source.extension() {
            Some(ext) if extensions::is_video_extension(ext) => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }
}

/// A loaded media resource held in memory.
#[derive(Debug, Clone)]
pub enum MediaHandle {
    Image(ImageData),
    Video(VideoData),
}

impl MediaHandle {
    /// Pixels to display: the image itself, or a video's first frame.
    #[must_use]
    pub fn preview(&self) -> &ImageData {
        match self {
            MediaHandle::Image(data) => data,
            MediaHandle::Video(video) => &video.poster,
        }
    }
}

/// Supported media extensions
pub mod extensions {
    /// Image file extensions picked up by directory scans.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];

    /// Video file extensions. Only these are loaded as videos.
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm"];

    #[must_use]
    pub fn is_video_extension(ext: &str) -> bool {
        VIDEO_EXTENSIONS.iter().any(|v| v.eq_ignore_ascii_case(ext))
    }

    /// Whether a directory scan should include a file with this extension.
    #[must_use]
    pub fn is_supported_extension(ext: &str) -> bool {
        is_video_extension(ext) || IMAGE_EXTENSIONS.iter().any(|i| i.eq_ignore_ascii_case(ext))
    }
}
