#![doc = include_str!("../README.md")]

mod backend;
mod error;
mod mask;
mod output;
mod pipeline;
mod request;

pub use backend::{Inpainter, Method, Telea};
pub use error::{Error, Result};
pub use mask::{MASK_THRESHOLD, MaskFit, binarize, fit_mask, load_mask};
pub use output::{ensure_parent_dir, fit_to_format, save};
pub use pipeline::{Summary, inpaint_file};
pub use request::{DEFAULT_QUALITY, DEFAULT_RADIUS, InpaintRequest};

use std::path::Path;

use image::{DynamicImage, ImageReader, ImageResult};

/// Decode an image, sniffing the format from its content before falling back
/// to the extension.
pub(crate) fn decode(path: &Path) -> ImageResult<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}
