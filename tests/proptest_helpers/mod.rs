#![allow(dead_code)]

use image::Rgb;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use tighty_tile::{Canvas, Raster};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Size-only raster that paints itself as a solid block tagged with its id.
///
/// Resizing keeps the id, so after composition every block's position on the
/// canvas can be recovered from the red channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub id: u8,
    pub width: u32,
    pub height: u32,
}

impl Block {
    pub fn color(&self) -> Rgb<u8> {
        // Green is always set so a block never reads as background.
        Rgb([self.id, 255, 0])
    }
}

impl Raster for Block {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize_to(&self, width: u32, height: u32) -> Self {
        Block {
            id: self.id,
            width,
            height,
        }
    }

    fn paste_onto(&self, canvas: &mut Canvas, x: u32, y: u32) {
        let x_end = (x + self.width).min(canvas.width());
        let y_end = (y + self.height).min(canvas.height());
        for py in y..y_end {
            for px in x..x_end {
                canvas.put_pixel(px, py, self.color());
            }
        }
    }
}

/// Between `min_len` and `max_len` blocks with sides in `1..=max_side`,
/// numbered in input order.
pub fn arb_blocks(min_len: usize, max_len: usize, max_side: u32) -> BoxedStrategy<Vec<Block>> {
    prop::collection::vec((1..=max_side, 1..=max_side), min_len..=max_len)
        .prop_map(|sizes| {
            sizes
                .into_iter()
                .enumerate()
                .map(|(i, (width, height))| Block {
                    id: i as u8,
                    width,
                    height,
                })
                .collect()
        })
        .boxed()
}
