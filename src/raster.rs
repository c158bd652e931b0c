//! The image capability seam between the tiling core and the codec library.
//!
//! The resizer and compositor only ever see a [`Raster`]: something with a
//! size that can produce a resized copy of itself and paint itself onto a
//! [`Canvas`]. [`image::DynamicImage`] is the production implementation.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageError, ImageReader, RgbImage};

use crate::error::TightyTileError;

/// The output buffer: always 3-channel 8-bit RGB, zero (black) initialized.
pub type Canvas = RgbImage;

/// Resampling filter used when an image actually changes size.
pub const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

/// Minimal image capability needed by [`fit_resize`](crate::tile::fit_resize)
/// and [`concatenate`](crate::tile::concatenate).
pub trait Raster: Sized {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Returns a new raster of exactly `width` x `height`.
    ///
    /// Implementations must return an unchanged copy when the requested
    /// size equals the current size.
    fn resize_to(&self, width: u32, height: u32) -> Self;

    /// Paints this raster onto `canvas` with its top-left corner at `(x, y)`.
    ///
    /// Any alpha or extra channels are flattened into the canvas' RGB layout.
    /// Pixels falling outside the canvas are clipped.
    fn paste_onto(&self, canvas: &mut Canvas, x: u32, y: u32);

    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl Raster for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn resize_to(&self, width: u32, height: u32) -> Self {
        if GenericImageView::dimensions(self) == (width, height) {
            return self.clone();
        }
        self.resize_exact(width, height, RESAMPLE_FILTER)
    }

    fn paste_onto(&self, canvas: &mut Canvas, x: u32, y: u32) {
        // to_rgb8 drops alpha rather than blending it over black.
        let rgb = self.to_rgb8();
        imageops::replace(canvas, &rgb, i64::from(x), i64::from(y));
    }
}

/// Decode the image at `path`, rejecting zero-area images.
///
/// The format is sniffed from the file's leading bytes, falling back to the
/// extension only when the content is not recognised.
pub fn load_image(path: &Path) -> Result<DynamicImage, TightyTileError> {
    let decode_err = |source: ImageError| TightyTileError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    let (width, height) = GenericImageView::dimensions(&image);
    if width == 0 || height == 0 {
        return Err(TightyTileError::ZeroDimension {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    log::debug!(
        "[Loading] image={:?} size=({}, {})",
        path.display(),
        width,
        height
    );
    Ok(image)
}
