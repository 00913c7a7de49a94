use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by file operations on the raster buffer
#[derive(Error, Debug)]
pub enum PaintError {
    #[error("failed to load image from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to save image to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type PaintResult<T> = Result<T, PaintError>;
