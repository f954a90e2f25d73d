/// CameraExtrinsics — camera placement in the world.
///
/// Stores the camera's local-to-world transform together with its inverse
/// (the view matrix). The camera looks down its local -Z axis.

use glam::{DMat4, DVec3};
use crate::error::Result;
use crate::ndc_err;

/// Below this |determinant| a transform is treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Camera world transform and its inverse, snapshotted at one evaluation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraExtrinsics {
    local_to_world: DMat4,
    world_to_camera: DMat4,
}

impl CameraExtrinsics {
    /// Create from the camera's local-to-world transform.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if the transform is non-finite or singular.
    pub fn new(local_to_world: DMat4) -> Result<Self> {
        let world_to_camera = Self::checked_inverse(&local_to_world)?;
        Ok(Self {
            local_to_world,
            world_to_camera,
        })
    }

    /// Create from a view matrix (world-to-camera), e.g. `DMat4::look_at_rh`.
    pub fn from_view(world_to_camera: DMat4) -> Result<Self> {
        let local_to_world = Self::checked_inverse(&world_to_camera)?;
        Ok(Self {
            local_to_world,
            world_to_camera,
        })
    }

    fn checked_inverse(matrix: &DMat4) -> Result<DMat4> {
        if !matrix.is_finite() {
            return Err(ndc_err!(
                "ndc::CameraExtrinsics",
                ConfigurationError,
                "Camera transform contains non-finite values"
            ));
        }
        let det = matrix.determinant();
        if det.abs() < SINGULAR_EPSILON {
            return Err(ndc_err!(
                "ndc::CameraExtrinsics",
                ConfigurationError,
                "Camera transform is singular (determinant {})",
                det
            ));
        }
        Ok(matrix.inverse())
    }

    /// Camera local-to-world transform.
    pub fn local_to_world(&self) -> &DMat4 {
        &self.local_to_world
    }

    /// World-to-camera transform (view matrix).
    pub fn world_to_camera(&self) -> &DMat4 {
        &self.world_to_camera
    }

    /// Camera position in world space.
    pub fn position(&self) -> DVec3 {
        self.local_to_world.w_axis.truncate()
    }

    /// Transform a world-space point into camera space.
    pub fn to_camera_space(&self, world_point: DVec3) -> DVec3 {
        self.world_to_camera.transform_point3(world_point)
    }
}

#[cfg(test)]
#[path = "extrinsics_tests.rs"]
mod tests;
