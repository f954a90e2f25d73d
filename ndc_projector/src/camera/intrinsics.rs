/// CameraIntrinsics — focal length and film back of a pinhole camera.
///
/// All three values share the host's scene units; only their ratios matter
/// to the projection, so no unit conversion happens here.

use crate::error::{Error, Result};
use crate::ndc_err;

/// Pinhole camera intrinsics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    /// Focal length (scene units)
    pub focal_length: f64,
    /// Horizontal aperture (scene units)
    pub aperture_width: f64,
    /// Vertical aperture (scene units)
    pub aperture_height: f64,
}

impl CameraIntrinsics {
    /// Create intrinsics without validation. See [`validate`](Self::validate).
    pub fn new(focal_length: f64, aperture_width: f64, aperture_height: f64) -> Self {
        Self {
            focal_length,
            aperture_width,
            aperture_height,
        }
    }

    /// Build intrinsics from optional host attributes.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if any attribute is missing or degenerate.
    pub fn from_attributes(
        focal_length: Option<f64>,
        aperture_width: Option<f64>,
        aperture_height: Option<f64>,
    ) -> Result<Self> {
        match (focal_length, aperture_width, aperture_height) {
            (Some(focal), Some(width), Some(height)) => {
                let intrinsics = Self::new(focal, width, height);
                intrinsics.validate()?;
                Ok(intrinsics)
            }
            _ => Err(ndc_err!(
                "ndc::CameraIntrinsics",
                ConfigurationError,
                "Camera is missing focal/aperture attributes"
            )),
        }
    }

    /// Check every value is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("focal length", self.focal_length),
            ("horizontal aperture", self.aperture_width),
            ("vertical aperture", self.aperture_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ndc_err!(
                    "ndc::CameraIntrinsics",
                    ConfigurationError,
                    "Camera {} is degenerate ({})",
                    name,
                    value
                ));
            }
        }
        Ok(())
    }

    /// Film back aspect ratio (width / height).
    ///
    /// # Errors
    ///
    /// `DivisionError` if the vertical aperture is zero.
    pub fn aspect(&self) -> Result<f64> {
        if self.aperture_height == 0.0 {
            return Err(Error::DivisionError(
                "camera vertical aperture is zero".to_string(),
            ));
        }
        Ok(self.aperture_width / self.aperture_height)
    }
}

#[cfg(test)]
#[path = "intrinsics_tests.rs"]
mod tests;
