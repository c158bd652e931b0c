//! Cross-axis normalization.

use super::ratio::ScaleRatio;
use crate::error::TightyTileError;
use crate::orient::Orientation;
use crate::raster::Raster;

/// Resize every image so its cross-axis extent equals the smallest one.
///
/// For [`Orientation::Horizontal`] all heights become `min(height)` and each
/// width is scaled by `min_height / height`, floored. [`Orientation::Vertical`]
/// does the same with the axes swapped. Aspect ratio is preserved per image.
/// Output order matches input order, and an image already at the target size
/// is passed through untouched.
///
/// A scaled concat-axis extent that floors to zero is clamped to one pixel.
///
/// # Errors
///
/// [`TightyTileError::NoImages`] for an empty input and
/// [`TightyTileError::ZeroDimensionAt`] for any zero-area image.
pub fn fit_resize<R: Raster>(
    images: Vec<R>,
    orient: Orientation,
) -> Result<Vec<R>, TightyTileError> {
    let target = common_cross_extent(&images, orient)?;

    let mut resized = Vec::with_capacity(images.len());
    for (index, image) in images.into_iter().enumerate() {
        let (concat, cross) = orient.split(image.width(), image.height());
        // common_cross_extent already rejected zero extents.
        let ratio = ScaleRatio::new(target, cross).unwrap_or(ScaleRatio::ONE);
        if ratio.is_identity() {
            log::debug!(
                "[Resize] image=#{} size=({}, {}) unchanged",
                index,
                image.width(),
                image.height()
            );
            resized.push(image);
            continue;
        }

        let new_concat = ratio.apply(concat).max(1);
        let (width, height) = orient.join(new_concat, target);
        log::debug!(
            "[Resize] image=#{} size=({}, {}) ratio={} new_size=({}, {})",
            index,
            image.width(),
            image.height(),
            ratio,
            width,
            height
        );
        resized.push(image.resize_to(width, height));
    }
    Ok(resized)
}

/// Smallest cross-axis extent over `images`.
fn common_cross_extent<R: Raster>(
    images: &[R],
    orient: Orientation,
) -> Result<u32, TightyTileError> {
    let mut target: Option<u32> = None;
    for (index, image) in images.iter().enumerate() {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(TightyTileError::ZeroDimensionAt {
                index,
                width,
                height,
            });
        }
        let (_, cross) = orient.split(width, height);
        target = Some(target.map_or(cross, |t| t.min(cross)));
    }
    target.ok_or(TightyTileError::NoImages)
}
