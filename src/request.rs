use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::mask::MaskFit;

/// Radius used when the caller doesn't provide one.
pub const DEFAULT_RADIUS: u32 = 3;
/// Quality used for lossy (JPEG) outputs.
pub const DEFAULT_QUALITY: u8 = 98;

/// Everything needed for a single inpainting job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InpaintRequest {
    pub image: PathBuf,
    pub mask: PathBuf,
    pub output: PathBuf,
    pub radius: u32,
    pub quality: u8,
    pub mask_fit: MaskFit,
}

impl InpaintRequest {
    pub fn new(
        image: impl Into<PathBuf>,
        mask: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image: image.into(),
            mask: mask.into(),
            output: output.into(),
            radius: DEFAULT_RADIUS,
            quality: DEFAULT_QUALITY,
            mask_fit: MaskFit::default(),
        }
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_mask_fit(mut self, mask_fit: MaskFit) -> Self {
        self.mask_fit = mask_fit;
        self
    }

    /// Check parameters and input paths, in that order.
    pub fn validate(&self) -> Result<()> {
        if self.radius == 0 || i32::try_from(self.radius).is_err() {
            return Err(Error::Argument(format!(
                "radius must be a positive integer, got {}",
                self.radius
            )));
        }
        if !(1..=100).contains(&self.quality) {
            return Err(Error::Argument(format!(
                "quality must be within 1-100, got {}",
                self.quality
            )));
        }
        require_file("Image", &self.image)?;
        require_file("Mask", &self.mask)?;
        Ok(())
    }
}

fn require_file(role: &'static str, path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::MissingFile {
            role,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn inputs() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("image.png"), b"").unwrap();
        std::fs::write(dir.path().join("mask.png"), b"").unwrap();
        dir
    }

    fn request_in(dir: &Path) -> InpaintRequest {
        InpaintRequest::new(
            dir.join("image.png"),
            dir.join("mask.png"),
            dir.join("out/result.jpg"),
        )
    }

    #[test]
    fn test_defaults() {
        let request = InpaintRequest::new("a.png", "b.png", "c.jpg");
        assert_eq!(request.radius, 3);
        assert_eq!(request.quality, 98);
        assert_eq!(request.mask_fit, MaskFit::Resample);
    }

    #[rstest]
    fn test_valid_request(inputs: tempfile::TempDir) {
        request_in(inputs.path()).with_radius(5).validate().unwrap();
    }

    #[rstest]
    #[case(0)]
    #[case(u32::MAX)]
    fn test_invalid_radius(inputs: tempfile::TempDir, #[case] radius: u32) {
        let error = request_in(inputs.path())
            .with_radius(radius)
            .validate()
            .unwrap_err();
        assert!(matches!(error, Error::Argument(_)));
    }

    #[rstest]
    #[case(0)]
    #[case(101)]
    fn test_invalid_quality(inputs: tempfile::TempDir, #[case] quality: u8) {
        let error = request_in(inputs.path())
            .with_quality(quality)
            .validate()
            .unwrap_err();
        assert!(matches!(error, Error::Argument(_)));
    }

    #[rstest]
    #[case("image.png", "Image")]
    #[case("mask.png", "Mask")]
    fn test_missing_input(inputs: tempfile::TempDir, #[case] removed: &str, #[case] expected: &str) {
        std::fs::remove_file(inputs.path().join(removed)).unwrap();
        match request_in(inputs.path()).validate() {
            Err(Error::MissingFile { role, path }) => {
                assert_eq!(role, expected);
                assert!(path.ends_with(removed));
            }
            other => panic!("expected missing file error, got {other:?}"),
        }
    }
}
