// SPDX-License-Identifier: MPL-2.0
//! Builds a gallery list from the media files in a directory.

use crate::error::Result;
use crate::gallery::GalleryList;
use crate::media::{extensions, SourceId};
use std::path::{Path, PathBuf};

/// Scans `directory` (non-recursively) for supported media files.
///
/// Files are sorted alphabetically by file name, case-insensitively, and
/// returned as sources relative to `directory`, so the list is meant to be
/// loaded with a [`FileLoader`](crate::media::FileLoader) rooted there.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<GalleryList> {
    let mut media_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_media(&path) {
            media_files.push(path);
        }
    }

    sort_by_name(&mut media_files);

    Ok(media_files
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| SourceId::new(name.to_string_lossy()))
        .collect())
}

fn is_supported_media(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(extensions::is_supported_extension)
}

fn sort_by_name(files: &mut [PathBuf]) {
    files.sort_by_cached_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
}
