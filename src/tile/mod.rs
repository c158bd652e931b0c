//! The resize-and-concatenate core.
//!
//! Images flow through two steps:
//!
//! 1. [`fit_resize`] scales every image so the cross axis (height for a
//!    horizontal strip, width for a vertical one) equals the smallest among
//!    them, using an exact [`ScaleRatio`].
//! 2. [`concatenate`] pastes the resized images onto a single black RGB
//!    canvas, one after another along the concat axis.
//!
//! # Example
//!
//! ```
//! use image::{DynamicImage, RgbImage};
//! use tighty_tile::{tile, Orientation};
//!
//! let images = vec![
//!     DynamicImage::ImageRgb8(RgbImage::new(100, 50)),
//!     DynamicImage::ImageRgb8(RgbImage::new(200, 100)),
//! ];
//! let resized = tile::fit_resize(images, Orientation::Horizontal).unwrap();
//! let canvas = tile::concatenate(&resized, Orientation::Horizontal).unwrap();
//! assert_eq!(canvas.dimensions(), (200, 50));
//! ```

mod compose;
mod ratio;
mod resize;

pub use compose::{canvas_extent, concatenate};
pub use ratio::ScaleRatio;
pub use resize::fit_resize;
