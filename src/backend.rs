use std::fmt;

use image::{DynamicImage, GrayImage};
use inpaint::prelude::ImageInpaint;

use crate::error::{Error, Result};

/// Inpainting algorithm selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Fast marching from the mask boundary (Telea 2004).
    #[default]
    Telea,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Telea => write!(f, "telea"),
        }
    }
}

/// Capability that fills the marked pixels of an image.
///
/// The mask has the same resolution as the image, and is binary: `255` marks a
/// pixel to reconstruct, `0` a pixel to keep.
pub trait Inpainter {
    fn method(&self) -> Method;

    fn inpaint(&self, image: &mut DynamicImage, mask: &GrayImage, radius: u32) -> Result<()>;
}

/// Telea inpainting provided by the `inpaint` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Telea;

impl Inpainter for Telea {
    fn method(&self) -> Method {
        Method::Telea
    }

    fn inpaint(&self, image: &mut DynamicImage, mask: &GrayImage, radius: u32) -> Result<()> {
        let radius = i32::try_from(radius)
            .map_err(|_| Error::Argument(format!("radius {radius} is out of range")))?;

        macro_rules! telea {
            ($buffer:expr) => {
                $buffer
                    .telea_inpaint(mask, radius)
                    .map_err(|error| Error::Processing(error.to_string()))
            };
        }

        match image {
            DynamicImage::ImageLuma8(buffer) => telea!(buffer),
            DynamicImage::ImageLumaA8(buffer) => telea!(buffer),
            DynamicImage::ImageRgb8(buffer) => telea!(buffer),
            DynamicImage::ImageRgba8(buffer) => telea!(buffer),
            DynamicImage::ImageLuma16(buffer) => telea!(buffer),
            DynamicImage::ImageLumaA16(buffer) => telea!(buffer),
            DynamicImage::ImageRgb16(buffer) => telea!(buffer),
            DynamicImage::ImageRgba16(buffer) => telea!(buffer),
            DynamicImage::ImageRgb32F(buffer) => telea!(buffer),
            DynamicImage::ImageRgba32F(buffer) => telea!(buffer),
            other => Err(Error::Processing(format!(
                "Unsupported color type {:?}",
                other.color()
            ))),
        }
    }
}
