// SPDX-License-Identifier: MPL-2.0
//! Resource loaders used by the preload cache.
//!
//! The cache does not know where bytes come from. It asks a [`MediaLoader`]
//! for a handle and only deals with bookkeeping. [`FileLoader`] is the
//! production implementation; tests plug in their own.

use crate::error::{LoadError, LoadFailure};
use crate::media::image::decode_image;
use crate::media::{MediaHandle, MediaKind, SourceId, VideoData};
use futures_util::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};

/// Loads one media resource.
pub trait MediaLoader: Send + Sync {
    /// Starts loading `source` as `kind`.
    ///
    /// Every call starts an independent load; implementations must not cache.
    fn load(&self, source: SourceId, kind: MediaKind)
        -> BoxFuture<'static, Result<MediaHandle, LoadError>>;
}

/// Loads media from the local filesystem, relative to an asset root.
#[derive(Debug, Clone)]
pub struct FileLoader {
    root: PathBuf,
}

impl FileLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute sources are used as-is, relative ones are joined to the root.
    #[must_use]
    pub fn resolve(&self, source: &SourceId) -> PathBuf {
        let path = Path::new(source.as_str());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl MediaLoader for FileLoader {
    fn load(
        &self,
        source: SourceId,
        kind: MediaKind,
    ) -> BoxFuture<'static, Result<MediaHandle, LoadError>> {
        let path = self.resolve(&source);
        async move {
            tracing::debug!(source = %source, path = %path.display(), ?kind, "loading media");
            tokio::task::spawn_blocking(move || load_from_disk(&path, kind))
                .await
                .unwrap_or_else(|e| Err(LoadFailure::Task(e.to_string())))
                .map_err(|reason| LoadError::new(source, reason))
        }
        .boxed()
    }
}

fn load_from_disk(path: &Path, kind: MediaKind) -> Result<MediaHandle, LoadFailure> {
    match kind {
        MediaKind::Image => {
            let bytes = std::fs::read(path).map_err(|e| LoadFailure::Io(e.to_string()))?;
            decode_image(&bytes).map(MediaHandle::Image)
        }
        MediaKind::Video => VideoData::probe(path).map(MediaHandle::Video),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn resolve_joins_relative_sources_to_root() {
        let loader = FileLoader::new("/srv/gallery");
        assert_eq!(
            loader.resolve(&SourceId::from("2024/a.jpg")),
            PathBuf::from("/srv/gallery/2024/a.jpg")
        );
    }

    #[test]
    fn resolve_keeps_absolute_sources() {
        let dir = tempdir().expect("failed to create temp dir");
        let absolute = dir.path().join("b.png");
        let source = SourceId::new(absolute.to_string_lossy());
        let loader = FileLoader::new("/elsewhere");
        assert_eq!(loader.resolve(&source), absolute);
    }

    #[tokio::test]
    async fn loads_png_from_disk() {
        let dir = tempdir().expect("failed to create temp dir");
        RgbaImage::from_pixel(4, 3, Rgba([255, 0, 0, 255]))
            .save(dir.path().join("red.png"))
            .expect("failed to write png");

        let loader = FileLoader::new(dir.path());
        let handle = loader
            .load(SourceId::from("red.png"), MediaKind::Image)
            .await
            .expect("png should load");
        assert!(matches!(handle, MediaHandle::Image(_)));
        let image = handle.preview();
        assert_eq!((image.width, image.height), (4, 3));
    }

    #[tokio::test]
    async fn missing_file_is_a_load_failure_naming_the_source() {
        let dir = tempdir().expect("failed to create temp dir");
        let loader = FileLoader::new(dir.path());
        let err = loader
            .load(SourceId::from("nope.jpg"), MediaKind::Image)
            .await
            .unwrap_err();
        assert_eq!(err.id.as_str(), "nope.jpg");
        assert!(matches!(err.reason, LoadFailure::Io(_)));
    }

    #[tokio::test]
    async fn undecodable_video_is_a_decode_failure() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut bytes = vec![0x00, 0x00, 0x00, 0x18];
        bytes.extend_from_slice(b"ftypisom");
        bytes.extend_from_slice(b"this is not a video stream at all");
        std::fs::write(dir.path().join("broken.mp4"), bytes).expect("failed to write fixture");

        let loader = FileLoader::new(dir.path());
        let err = loader
            .load(SourceId::from("broken.mp4"), MediaKind::Video)
            .await
            .unwrap_err();
        assert_eq!(err.id.as_str(), "broken.mp4");
        assert!(matches!(err.reason, LoadFailure::Decode(_)));
    }

    #[tokio::test]
    async fn sample_video_loads_with_poster() {
        let root = Path::new("tests/data");
        if !root.join("sample.mp4").exists() {
            return; // Skip if test file doesn't exist
        }
        let handle = FileLoader::new(root)
            .load(SourceId::from("sample.mp4"), MediaKind::Video)
            .await
            .expect("sample should load");
        match handle {
            MediaHandle::Video(video) => assert!(video.poster.width > 0),
            MediaHandle::Image(_) => panic!("expected a video handle"),
        }
    }
}
