// SPDX-License-Identifier: MPL-2.0
//! Video probing with FFmpeg.
//!
//! Preloading a video opens its container, decodes the first frame of the best
//! video stream and keeps it as an RGBA poster. A file FFmpeg cannot decode is
//! a load failure at preload time, like an undecodable image.

use crate::error::LoadFailure;
use crate::media::ImageData;
use std::path::Path;
use std::sync::OnceLock;

static FFMPEG_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Initializes FFmpeg once per process and silences its warnings.
///
/// # Errors
///
/// Returns [`LoadFailure::Decode`] if FFmpeg could not be initialized.
pub fn init_ffmpeg() -> Result<(), LoadFailure> {
    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg_next::init().map_err(|e| format!("FFmpeg initialization failed: {e}"))?;
            // SAFETY: av_log_set_level is thread-safe and only affects logging
            unsafe {
                ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
            }
            Ok(())
        })
        .clone()
        .map_err(LoadFailure::Decode)
}

/// A video whose first frame has been decoded.
#[derive(Debug, Clone)]
pub struct VideoData {
    /// First frame, shown in the gallery and the lightbox.
    pub poster: ImageData,
    /// Size of the file on disk.
    pub byte_len: u64,
}

impl VideoData {
    /// Probes the video at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadFailure::Io`] when the file cannot be read and
    /// [`LoadFailure::Decode`] for anything FFmpeg rejects.
    pub fn probe(path: &Path) -> Result<Self, LoadFailure> {
        let byte_len = std::fs::metadata(path)
            .map_err(|e| LoadFailure::Io(e.to_string()))?
            .len();
        let poster = extract_first_frame(path)?;
        Ok(Self { poster, byte_len })
    }
}

/// Decodes the first frame of the best video stream into RGBA.
///
/// # Errors
///
/// Returns [`LoadFailure::Decode`] if the container, stream or frame cannot be
/// decoded.
pub fn extract_first_frame(path: &Path) -> Result<ImageData, LoadFailure> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(path)
        .map_err(|e| decode_failure("failed to open video", e))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| LoadFailure::Decode("no video stream found".to_string()))?;
    let stream_index = input.index();

    let context = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| decode_failure("failed to create codec context", e))?;
    let mut decoder = context
        .decoder()
        .video()
        .map_err(|e| decode_failure("failed to create video decoder", e))?;

    let (width, height) = (decoder.width(), decoder.height());
    if width == 0 || height == 0 {
        return Err(LoadFailure::Decode(format!(
            "invalid video dimensions: {width}x{height}"
        )));
    }

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| decode_failure("failed to create scaler", e))?;

    let mut decoded = ffmpeg_next::frame::Video::empty();
    let mut got_frame = false;
    for (stream, packet) in ictx.packets() {
        if stream.index() != stream_index {
            continue;
        }
        decoder
            .send_packet(&packet)
            .map_err(|e| decode_failure("failed to send packet", e))?;
        if decoder.receive_frame(&mut decoded).is_ok() {
            got_frame = true;
            break;
        }
    }
    // Short clips may only yield their frame once the decoder is drained.
    if !got_frame && decoder.send_eof().is_ok() {
        got_frame = decoder.receive_frame(&mut decoded).is_ok();
    }
    if !got_frame {
        return Err(LoadFailure::Decode(
            "could not decode first frame".to_string(),
        ));
    }

    let mut rgba = ffmpeg_next::frame::Video::empty();
    scaler
        .run(&decoded, &mut rgba)
        .map_err(|e| decode_failure("failed to scale frame", e))?;

    Ok(ImageData::from_rgba(
        rgba.width(),
        rgba.height(),
        copy_rows(rgba.data(0), rgba.stride(0), rgba.width(), rgba.height()),
    ))
}

/// Packs a strided RGBA plane into tightly packed rows.
fn copy_rows(data: &[u8], stride: usize, width: u32, height: u32) -> Vec<u8> {
    let row_len = width as usize * 4;
    let mut pixels = Vec::with_capacity(row_len * height as usize);
    for row in data.chunks(stride).take(height as usize) {
        pixels.extend_from_slice(&row[..row_len.min(row.len())]);
    }
    pixels
}

fn decode_failure(context: &str, err: ffmpeg_next::Error) -> LoadFailure {
    LoadFailure::Decode(format!("{context}: {err}"))
}
