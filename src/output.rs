//! Writing inpainted results.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageError, ImageFormat, ImageResult};
use tracing::debug;

use crate::error::{Error, Result};

/// Create the directory tree the output will be written into.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|error| Error::OutputWrite {
                path: path.to_path_buf(),
                source: ImageError::IoError(error),
            })
        }
        _ => Ok(()),
    }
}

fn is_high_depth(color: ColorType) -> bool {
    color.bytes_per_pixel() > color.channel_count()
}

fn is_float(color: ColorType) -> bool {
    matches!(color, ColorType::Rgb32F | ColorType::Rgba32F)
}

fn integer_layout(has_color: bool, has_alpha: bool, high_depth: bool) -> ColorType {
    match (has_color, has_alpha, high_depth) {
        (false, false, false) => ColorType::L8,
        (false, true, false) => ColorType::La8,
        (true, false, false) => ColorType::Rgb8,
        (true, true, false) => ColorType::Rgba8,
        (false, false, true) => ColorType::L16,
        (false, true, true) => ColorType::La16,
        (true, false, true) => ColorType::Rgb16,
        (true, true, true) => ColorType::Rgba16,
    }
}

/// Sample layout the encoder for `format` accepts for an image of `color`.
fn target_color(color: ColorType, format: ImageFormat) -> ColorType {
    let (has_color, has_alpha) = (color.has_color(), color.has_alpha());
    let high_depth = is_high_depth(color);

    match format {
        ImageFormat::Jpeg => integer_layout(has_color, false, false),
        ImageFormat::Gif => integer_layout(true, has_alpha, false),
        ImageFormat::OpenExr if has_alpha => ColorType::Rgba32F,
        ImageFormat::OpenExr => ColorType::Rgb32F,
        // TIFF has no luma+alpha encoder.
        ImageFormat::Tiff if has_alpha && !has_color => integer_layout(true, true, high_depth),
        ImageFormat::Png | ImageFormat::Tiff | ImageFormat::Pnm if is_float(color) => {
            integer_layout(has_color, has_alpha, true)
        }
        ImageFormat::Png | ImageFormat::Tiff | ImageFormat::Pnm => color,
        _ if high_depth => integer_layout(has_color, has_alpha, false),
        _ => color,
    }
}

/// Convert `image` to a sample layout the encoder for `format` accepts.
pub fn fit_to_format(image: DynamicImage, format: ImageFormat) -> DynamicImage {
    let target = target_color(image.color(), format);
    if image.color() == target {
        return image;
    }

    match target {
        ColorType::L8 => image.to_luma8().into(),
        ColorType::La8 => image.to_luma_alpha8().into(),
        ColorType::Rgb8 => image.to_rgb8().into(),
        ColorType::Rgba8 => image.to_rgba8().into(),
        ColorType::L16 => image.to_luma16().into(),
        ColorType::La16 => image.to_luma_alpha16().into(),
        ColorType::Rgb16 => image.to_rgb16().into(),
        ColorType::Rgba16 => image.to_rgba16().into(),
        ColorType::Rgb32F => image.to_rgb32f().into(),
        ColorType::Rgba32F => image.to_rgba32f().into(),
        _ => image,
    }
}

fn encode(image: &DynamicImage, format: ImageFormat, quality: u8) -> ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match format {
        ImageFormat::Jpeg => {
            image.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))?
        }
        _ => image.write_to(&mut Cursor::new(&mut bytes), format)?,
    }
    Ok(bytes)
}

/// Encode `image` to `path`, format chosen by the file extension.
///
/// The file is only touched once encoding succeeded. `quality` only applies
/// to lossy formats.
pub fn save(image: DynamicImage, path: &Path, quality: u8) -> Result<()> {
    let to_error = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let format = ImageFormat::from_path(path).map_err(to_error)?;
    let image = fit_to_format(image, format);
    debug!(
        "Writing {:?} as {:?} to {}",
        image.color(),
        format,
        path.display()
    );

    let bytes = encode(&image, format, quality).map_err(to_error)?;
    fs::write(path, bytes).map_err(|error| to_error(ImageError::IoError(error)))
}
