//! Mask loading and preparation.
//!
//! A mask is reduced to a strict binary classification before it reaches the
//! inpainting backend: samples above [`MASK_THRESHOLD`] become `255` (inpaint),
//! everything else becomes `0` (keep).

use std::path::Path;

use glam::UVec2;
use image::GrayImage;
use image::imageops::{self, FilterType};
use ndarray::ArrayViewMut2;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Samples strictly above this value are inpainted.
pub const MASK_THRESHOLD: u8 = 127;

/// What to do with a mask whose resolution differs from the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaskFit {
    /// Resample the mask to the image resolution (bilinear, lossy).
    #[default]
    Resample,
    /// Refuse to continue.
    Strict,
}

/// Load a mask from disk as 8 bit single channel.
pub fn load_mask(path: &Path) -> Result<GrayImage> {
    let mask = crate::decode(path).map_err(|source| Error::MaskLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(mask.to_luma8())
}

/// Bring the mask to `resolution`. Returns the mask and whether it was resampled.
pub fn fit_mask(mask: GrayImage, resolution: UVec2, fit: MaskFit) -> Result<(GrayImage, bool)> {
    let mask_resolution = UVec2::from(mask.dimensions());
    if mask_resolution == resolution {
        return Ok((mask, false));
    }

    match fit {
        MaskFit::Strict => Err(Error::DimensionMismatch {
            image: resolution,
            mask: mask_resolution,
        }),
        MaskFit::Resample => {
            warn!(
                "Mask resolution {} differs from image resolution {}, resampling mask",
                mask_resolution, resolution
            );
            let resampled = imageops::resize(&mask, resolution.x, resolution.y, FilterType::Triangle);
            Ok((resampled, true))
        }
    }
}

/// Threshold the mask in place. Returns the number of pixels marked for inpainting.
pub fn binarize(mask: &mut GrayImage, threshold: u8) -> Result<usize> {
    let (width, height) = mask.dimensions();
    let buffer: &mut [u8] = mask;
    let mut view = ArrayViewMut2::from_shape((height as usize, width as usize), buffer)?;

    view.mapv_inplace(|value| if value > threshold { u8::MAX } else { 0 });
    let marked = view.iter().filter(|&&value| value == u8::MAX).count();

    debug!("Mask marks {} of {} pixels", marked, view.len());
    Ok(marked)
}
