use glam::UVec2;
use tracing::{debug, info};

use crate::backend::Inpainter;
use crate::error::{Error, Result};
use crate::mask::{self, MASK_THRESHOLD};
use crate::output;
use crate::request::InpaintRequest;

/// Outcome of a finished job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub resolution: UVec2,
    /// Pixels the prepared mask marked for inpainting.
    pub marked_pixels: usize,
    pub mask_resampled: bool,
    /// `false` when the mask marked nothing and the source was written as is.
    pub inpainted: bool,
}

/// A radius beyond the image diagonal reaches no further pixels, only more work.
fn effective_radius(radius: u32, resolution: UVec2) -> u32 {
    let diagonal = resolution.as_vec2().length().ceil() as u32;
    radius.min(diagonal.max(1))
}

/// Run one job: load, prepare the mask, inpaint, write.
pub fn inpaint_file<I: Inpainter + ?Sized>(request: &InpaintRequest, inpainter: &I) -> Result<Summary> {
    request.validate()?;
    output::ensure_parent_dir(&request.output)?;

    let mut image = crate::decode(&request.image).map_err(|source| Error::ImageLoad {
        path: request.image.clone(),
        source,
    })?;
    let resolution = UVec2::new(image.width(), image.height());
    debug!(
        "Loaded {} ({}, {:?})",
        request.image.display(),
        resolution,
        image.color()
    );

    let mask = mask::load_mask(&request.mask)?;
    let (mut mask, mask_resampled) = mask::fit_mask(mask, resolution, request.mask_fit)?;
    let marked_pixels = mask::binarize(&mut mask, MASK_THRESHOLD)?;

    let inpainted = marked_pixels > 0;
    if inpainted {
        let radius = effective_radius(request.radius, resolution);
        if radius != request.radius {
            debug!("Radius {} clamped to image diagonal {}", request.radius, radius);
        }
        info!(
            "Inpainting {} pixel(s) with {} (radius {})",
            marked_pixels,
            inpainter.method(),
            radius
        );
        inpainter.inpaint(&mut image, &mask, radius)?;
    } else {
        info!("Mask marks no pixels, writing source unchanged");
    }

    output::save(image, &request.output, request.quality)?;

    Ok(Summary {
        resolution,
        marked_pixels,
        mask_resampled,
        inpainted,
    })
}
