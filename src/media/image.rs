// SPDX-License-Identifier: MPL-2.0
//! Image decoding into display-ready RGBA handles.

use crate::error::LoadFailure;
use iced::widget::image;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Size in bytes of the decoded pixels (width * height * 4 for RGBA).
    #[must_use]
    pub fn byte_size(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes encoded image bytes (PNG, JPEG, GIF, WebP, ...) into RGBA.
///
/// The format is sniffed from the bytes, not from the file name.
///
/// # Errors
///
/// Returns [`LoadFailure::Decode`] if the bytes are not a supported image.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData, LoadFailure> {
    let decoded =
        image_rs::load_from_memory(bytes).map_err(|e| LoadFailure::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}
