use std::path::PathBuf;
use thiserror::Error;

/// The main error type for tighty-tile operations.
#[derive(Debug, Error)]
pub enum TightyTileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error("Unsupported direction: {0} (supported: h, horizontal, v, vertical)")]
    UnknownOrientation(String),

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {path} has zero area ({width}x{height})")]
    ZeroDimension {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("Image #{index} has zero area ({width}x{height})")]
    ZeroDimensionAt {
        index: usize,
        width: u32,
        height: u32,
    },

    #[error("No images to concatenate")]
    NoImages,

    #[error("Concatenated image would be {width}x{height}, too large to allocate")]
    CanvasTooLarge { width: u64, height: u64 },

    #[error("Failed to save image to \"{path}\": {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image to \"{path}\": {source}")]
    JpegEncode {
        path: PathBuf,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    #[error("Failed to save image to \"{path}\": {width}x{height} exceeds the JPEG limit of 65535 pixels per side")]
    JpegTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("Failed to write image to \"{path}\": {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TightyTileError {
    /// Process exit status for this error: 2 for invocation problems, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            TightyTileError::Usage(_) | TightyTileError::UnknownOrientation(_) => 2,
            _ => 1,
        }
    }
}
