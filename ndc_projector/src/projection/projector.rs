/// PinholeProjector — world point to normalized device coordinates.
///
/// One projector serves both output modes: the aggregate data window
/// ([`window_of`](PinholeProjector::window_of)) and the index-aligned
/// per-point array ([`project_points`](PinholeProjector::project_points)).
///
/// Camera-space convention: the camera looks down -Z, so only points with
/// `z < 0` are projectable.

use glam::{DMat4, DVec3};
use crate::camera::{
    CameraExtrinsics, CameraIntrinsics, EffectiveAperture, EvaluationContext,
    compute_effective_aperture,
};
use crate::error::Result;
use crate::ndc_debug;
use super::bounds::Aabb;
use super::ndc::{NdcPoint, NdcWindow};

/// Tunables for per-point projector output.
///
/// Data window padding is passed per call to the window operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// UV written for points at or behind the camera plane in per-point mode
    pub unprojectable_uv: NdcPoint,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            unprojectable_uv: NdcPoint::CENTER,
        }
    }
}

/// Project a single world point.
///
/// Returns `None` when the point is at or behind the camera plane
/// (camera-space `z >= 0`); callers must skip it.
pub fn project_point(
    world_point: DVec3,
    camera_inverse: &DMat4,
    focal_length: f64,
    effective_aperture_x: f64,
    effective_aperture_y: f64,
) -> Option<NdcPoint> {
    let cam = camera_inverse.transform_point3(world_point);
    if cam.z >= 0.0 {
        return None;
    }

    let depth = cam.z.abs();
    let ndc_x = (cam.x * focal_length) / (depth * effective_aperture_x * 0.5);
    let ndc_y = (cam.y * focal_length) / (depth * effective_aperture_y * 0.5);

    Some(NdcPoint {
        u: ndc_x * 0.5 + 0.5,
        v: ndc_y * 0.5 + 0.5,
    })
}

/// Pinhole projector with camera and conformed aperture bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinholeProjector {
    world_to_camera: DMat4,
    focal_length: f64,
    aperture: EffectiveAperture,
}

impl PinholeProjector {
    /// Create from already-validated parts.
    pub fn new(world_to_camera: DMat4, focal_length: f64, aperture: EffectiveAperture) -> Self {
        Self {
            world_to_camera,
            focal_length,
            aperture,
        }
    }

    /// Validate the context and conform the film back to its render target.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` for degenerate intrinsics or a zero render height;
    /// `DivisionError` for a zero render aspect.
    pub fn from_context(ctx: &EvaluationContext) -> Result<Self> {
        ctx.intrinsics.validate()?;
        let render_aspect = ctx.render_target.aspect()?;
        let aperture = compute_effective_aperture(
            &ctx.intrinsics,
            render_aspect,
            ctx.render_target.conform_policy,
        )?;

        ndc_debug!(
            "ndc::Projector",
            "t={} render aspect {:.4} ({}), effective aperture {:.4} x {:.4}",
            ctx.time,
            render_aspect,
            ctx.render_target.conform_policy.as_token(),
            aperture.x,
            aperture.y
        );

        Ok(Self::new(
            *ctx.extrinsics.world_to_camera(),
            ctx.intrinsics.focal_length,
            aperture,
        ))
    }

    /// Projector on the native (unconformed) film back.
    ///
    /// Used where no render target is involved, e.g. camera-based UV shading.
    pub fn native(extrinsics: &CameraExtrinsics, intrinsics: &CameraIntrinsics) -> Result<Self> {
        intrinsics.validate()?;
        Ok(Self::new(
            *extrinsics.world_to_camera(),
            intrinsics.focal_length,
            EffectiveAperture {
                x: intrinsics.aperture_width,
                y: intrinsics.aperture_height,
            },
        ))
    }

    /// Conformed aperture this projector divides by.
    pub fn aperture(&self) -> EffectiveAperture {
        self.aperture
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Project one world point; `None` if at or behind the camera plane.
    pub fn project_point(&self, world_point: DVec3) -> Option<NdcPoint> {
        project_point(
            world_point,
            &self.world_to_camera,
            self.focal_length,
            self.aperture.x,
            self.aperture.y,
        )
    }

    /// Per-point mode: one entry per input point, index-aligned.
    pub fn project_points(&self, world_points: &[DVec3]) -> Vec<Option<NdcPoint>> {
        world_points.iter().map(|p| self.project_point(*p)).collect()
    }

    /// Aggregate mode: padded, clamped window over every projectable box corner.
    ///
    /// Returns `None` when no corner is in front of the camera.
    pub fn window_of(&self, world_bounds: &[Aabb], padding: f64) -> Option<NdcWindow> {
        let projected = world_bounds
            .iter()
            .flat_map(|aabb| aabb.corners())
            .filter_map(|corner| self.project_point(corner));
        NdcWindow::from_points(projected, padding)
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
