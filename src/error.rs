use std::path::PathBuf;

use glam::UVec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    Argument(String),
    #[error("{role} file does not exist: {}", .path.display())]
    MissingFile { role: &'static str, path: PathBuf },
    #[error("Could not load image from {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Could not load mask from {}: {source}", .path.display())]
    MaskLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Could not save result to {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Mask resolution {mask} doesn't match image resolution {image}.")]
    DimensionMismatch { image: UVec2, mask: UVec2 },
    #[error("NDArray had an error during initialization of shape: {0}")]
    NDArray(#[from] ndarray::ShapeError),
    #[error("Error during inpainting: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, Error>;
