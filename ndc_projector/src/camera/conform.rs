/// Aspect-ratio conform between the camera film back and the render target.
///
/// When the two aspects differ, the film back is either expanded (the render
/// sees more than the camera frames) or cropped (the render sees less).

use crate::error::{Error, Result};
use super::intrinsics::CameraIntrinsics;

/// How a camera/render aspect mismatch is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConformPolicy {
    /// Grow the aperture along one axis so the whole film back stays visible
    #[default]
    ExpandAperture,
    /// Shrink the aperture along one axis so the render is fully covered
    CropAperture,
}

impl ConformPolicy {
    /// Parse the host token. Only `expandAperture` selects expansion;
    /// any other value (including `cropAperture`) is treated as a crop.
    pub fn from_token(token: &str) -> Self {
        match token {
            "expandAperture" => ConformPolicy::ExpandAperture,
            _ => ConformPolicy::CropAperture,
        }
    }

    /// Host token for this policy.
    pub fn as_token(&self) -> &'static str {
        match self {
            ConformPolicy::ExpandAperture => "expandAperture",
            ConformPolicy::CropAperture => "cropAperture",
        }
    }
}

/// Film back after conforming to the render aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveAperture {
    /// Horizontal aperture (scene units)
    pub x: f64,
    /// Vertical aperture (scene units)
    pub y: f64,
}

/// Conform the camera film back to `render_aspect` under `policy`.
///
/// Ties (`camera aspect == render aspect`) return the native aperture
/// unchanged under either policy, without rounding through the render aspect.
///
/// # Errors
///
/// `DivisionError` if the vertical aperture or the render aspect is zero
/// (or the render aspect is not finite).
pub fn compute_effective_aperture(
    camera: &CameraIntrinsics,
    render_aspect: f64,
    policy: ConformPolicy,
) -> Result<EffectiveAperture> {
    if render_aspect == 0.0 || !render_aspect.is_finite() {
        return Err(Error::DivisionError(format!(
            "render aspect must be finite and non-zero (got {})",
            render_aspect
        )));
    }
    let camera_aspect = camera.aspect()?;

    let native = EffectiveAperture {
        x: camera.aperture_width,
        y: camera.aperture_height,
    };
    if camera_aspect == render_aspect {
        return Ok(native);
    }

    let widen_horizontally = EffectiveAperture {
        x: camera.aperture_height * render_aspect,
        y: camera.aperture_height,
    };
    let widen_vertically = EffectiveAperture {
        x: camera.aperture_width,
        y: camera.aperture_width / render_aspect,
    };

    let aperture = match policy {
        ConformPolicy::ExpandAperture if camera_aspect < render_aspect => widen_horizontally,
        ConformPolicy::ExpandAperture => widen_vertically,
        ConformPolicy::CropAperture if camera_aspect < render_aspect => widen_vertically,
        ConformPolicy::CropAperture => widen_horizontally,
    };

    Ok(aperture)
}

#[cfg(test)]
#[path = "conform_tests.rs"]
mod tests;
