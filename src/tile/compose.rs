//! Canvas layout and pasting.

use crate::error::TightyTileError;
use crate::orient::Orientation;
use crate::raster::{Canvas, Raster};

/// Paste `images` one after another onto a fresh black canvas.
///
/// The canvas extent is the sum of the images along the concat axis and the
/// maximum across it. Offsets start at 0 and advance by each pasted image's
/// concat-axis extent; the cross-axis offset is always 0, so images are
/// top-aligned (horizontal) or left-aligned (vertical).
///
/// # Errors
///
/// [`TightyTileError::NoImages`] for an empty input and
/// [`TightyTileError::CanvasTooLarge`] when the canvas would not fit in memory.
pub fn concatenate<R: Raster>(images: &[R], orient: Orientation) -> Result<Canvas, TightyTileError> {
    let (width, height) = canvas_extent(images, orient)?;
    log::debug!("[Concatenate] concatenated_size=({}, {})", width, height);

    let mut canvas = Canvas::new(width, height);
    let mut offset = 0u32;
    for image in images {
        let (x, y) = orient.join(offset, 0);
        image.paste_onto(&mut canvas, x, y);
        let (advance, _) = orient.split(image.width(), image.height());
        offset += advance;
    }
    Ok(canvas)
}

/// `(width, height)` of the canvas that holds `images` laid out along `orient`.
pub fn canvas_extent<R: Raster>(
    images: &[R],
    orient: Orientation,
) -> Result<(u32, u32), TightyTileError> {
    if images.is_empty() {
        return Err(TightyTileError::NoImages);
    }

    let mut concat_total = 0u64;
    let mut cross_max = 0u32;
    for image in images {
        let (concat, cross) = orient.split(image.width(), image.height());
        concat_total += u64::from(concat);
        cross_max = cross_max.max(cross);
    }

    let too_large = || {
        let (width, height) = match orient {
            Orientation::Horizontal => (concat_total, u64::from(cross_max)),
            Orientation::Vertical => (u64::from(cross_max), concat_total),
        };
        TightyTileError::CanvasTooLarge { width, height }
    };

    let concat_total = u32::try_from(concat_total).map_err(|_| too_large())?;
    let (width, height) = orient.join(concat_total, cross_max);

    // RGB8 buffers are indexed with usize; refuse anything that cannot be allocated.
    let bytes = u64::from(width) * u64::from(height) * 3;
    if usize::try_from(bytes).is_err() || bytes > isize::MAX as u64 {
        return Err(too_large());
    }
    Ok((width, height))
}
