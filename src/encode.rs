//! Persisting the composed canvas.
//!
//! The output format is chosen solely from the destination's file extension,
//! matched case-insensitively:
//!
//! | Extension       | Profile                                                  |
//! |-----------------|----------------------------------------------------------|
//! | `.png`          | lossless, best compression, adaptive filtering           |
//! | `.jpg`, `.jpeg` | quality 100, 4:4:4, optimized Huffman, progressive scans |
//! | `.webp`         | lossless                                                 |
//! | anything else   | whatever `image` infers from the extension, if any       |
//!
//! The whole file is encoded in memory first; the destination is only
//! created or truncated once encoding has succeeded.

use std::ffi::OsStr;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{ImageError, ImageFormat};
use jpeg_encoder::{ColorType, Encoder as JpegEncoder, SamplingFactor};

use crate::error::TightyTileError;
use crate::raster::Canvas;

/// JPEG quality used for `.jpg`/`.jpeg` output.
pub const JPEG_QUALITY: u8 = 100;

/// Encoder settings selected by output extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingProfile {
    Png,
    Jpeg,
    WebP,
    /// Defer to the codec's default for whatever the extension maps to.
    Inferred,
}

impl EncodingProfile {
    /// Pick the profile for `path` from its extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => EncodingProfile::Png,
            Some("jpg" | "jpeg") => EncodingProfile::Jpeg,
            Some("webp") => EncodingProfile::WebP,
            _ => EncodingProfile::Inferred,
        }
    }

    /// Human-readable name for the profile.
    pub fn name(&self) -> &'static str {
        match self {
            EncodingProfile::Png => "png",
            EncodingProfile::Jpeg => "jpeg",
            EncodingProfile::WebP => "webp",
            EncodingProfile::Inferred => "inferred",
        }
    }

    /// Whether decoding the output yields exactly the encoded pixels.
    pub fn is_lossless(&self) -> bool {
        matches!(self, EncodingProfile::Png | EncodingProfile::WebP)
    }
}

/// What [`save_image`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveOutcome {
    pub path: PathBuf,
    pub profile: EncodingProfile,
    /// True when a file already existed at `path` and was replaced.
    pub overwrote: bool,
}

/// Encode `image` to `path`, overwriting any existing file after a warning.
///
/// A failed encode leaves any existing file at `path` untouched.
///
/// # Errors
///
/// [`TightyTileError::Encode`] or [`TightyTileError::JpegEncode`] when the
/// codec rejects the image or the extension, and [`TightyTileError::Write`]
/// when the encoded bytes cannot be written. Failures are logged at error
/// level before being returned.
pub fn save_image(image: &Canvas, path: &Path) -> Result<SaveOutcome, TightyTileError> {
    let overwrote = path.exists();
    if overwrote {
        log::warn!(
            "Output file \"{}\" already exists and will be overwritten.",
            path.display()
        );
    }

    let profile = EncodingProfile::from_path(path);
    log::info!("Saving image to \"{}\"...", path.display());

    let written = encode_with_profile(image, path, profile).and_then(|bytes| {
        log::debug!("[Encode] profile={} bytes={}", profile.name(), bytes.len());
        std::fs::write(path, bytes).map_err(|source| TightyTileError::Write {
            path: path.to_path_buf(),
            source,
        })
    });
    if let Err(err) = written {
        log::error!("{}", err);
        return Err(err);
    }

    log::info!("Image successfully saved to \"{}\".", path.display());
    Ok(SaveOutcome {
        path: path.to_path_buf(),
        profile,
        overwrote,
    })
}

/// Encode `image` into the bytes of a complete file for `profile`.
fn encode_with_profile(
    image: &Canvas,
    path: &Path,
    profile: EncodingProfile,
) -> Result<Vec<u8>, TightyTileError> {
    let encode_err = |source: ImageError| TightyTileError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    match profile {
        EncodingProfile::Png => {
            let encoder =
                PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive);
            image.write_with_encoder(encoder).map_err(encode_err)?;
        }
        EncodingProfile::Jpeg => encode_jpeg(image, path, &mut bytes)?,
        EncodingProfile::WebP => {
            let encoder = WebPEncoder::new_lossless(&mut bytes);
            image.write_with_encoder(encoder).map_err(encode_err)?;
        }
        EncodingProfile::Inferred => {
            let format = ImageFormat::from_path(path).map_err(encode_err)?;
            image
                .write_to(&mut Cursor::new(&mut bytes), format)
                .map_err(encode_err)?;
        }
    }
    Ok(bytes)
}

fn encode_jpeg(image: &Canvas, path: &Path, bytes: &mut Vec<u8>) -> Result<(), TightyTileError> {
    let (width, height) = image.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(TightyTileError::JpegTooLarge {
            path: path.to_path_buf(),
            width,
            height,
        });
    };

    let mut encoder = JpegEncoder::new(bytes, JPEG_QUALITY);
    encoder.set_sampling_factor(SamplingFactor::F_1_1);
    encoder.set_optimized_huffman_tables(true);
    encoder.set_progressive(true);
    encoder
        .encode(image.as_raw(), w, h, ColorType::Rgb)
        .map_err(|source| TightyTileError::JpegEncode {
            path: path.to_path_buf(),
            source,
        })
}
