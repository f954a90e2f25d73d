/// Camera-based UV projection shading.
///
/// Per-point output mode of the projector: for every mesh point, the NDC
/// position seen from the camera plus its facing ratio, packed as the
/// host's `Float3Array` primvar layout.

use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DVec3};
use crate::error::Result;
use crate::projection::{PinholeProjector, ProjectionConfig};
use crate::{ndc_debug, ndc_warn};
use super::facing_ratio::{facing_ratio_face_varying, facing_ratio_vertex, NormalInterpolation};

/// One shading sample: projected UV and facing ratio.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct UvFacingSample {
    pub u: f32,
    pub v: f32,
    pub facing: f32,
}

/// Mesh normals in either interpolation.
#[derive(Debug, Clone, Copy)]
pub enum Normals<'a> {
    /// One normal per point
    Vertex(&'a [DVec3]),
    /// One normal per face-vertex, with the face-vertex -> point indices
    FaceVarying {
        normals: &'a [DVec3],
        face_vertex_indices: &'a [u32],
    },
}

impl Normals<'_> {
    pub fn interpolation(&self) -> NormalInterpolation {
        match self {
            Normals::Vertex(_) => NormalInterpolation::Vertex,
            Normals::FaceVarying { .. } => NormalInterpolation::FaceVarying,
        }
    }
}

/// Transform local points into world space.
pub fn points_to_world(local_points: &[DVec3], local_to_world: &DMat4) -> Vec<DVec3> {
    local_points
        .iter()
        .map(|p| local_to_world.transform_point3(*p))
        .collect()
}

/// Project every world point and pair it with its facing ratio.
///
/// The output is index-aligned with `world_points`. Points at or behind the
/// camera plane take `config.unprojectable_uv`. A mesh without points has
/// nothing to write: it is skipped with a warning and yields no samples.
///
/// # Errors
///
/// `InvalidInput` for inconsistent normal arrays.
pub fn project_uv_facing(
    projector: &PinholeProjector,
    camera_pos: DVec3,
    world_points: &[DVec3],
    normals: Normals<'_>,
    config: &ProjectionConfig,
) -> Result<Vec<UvFacingSample>> {
    if world_points.is_empty() {
        ndc_warn!("ndc::UvProjection", "Mesh has no points, skipping");
        return Ok(Vec::new());
    }

    let facing = match normals {
        Normals::Vertex(normals) => facing_ratio_vertex(camera_pos, normals, world_points)?,
        Normals::FaceVarying { normals, face_vertex_indices } => {
            facing_ratio_face_varying(camera_pos, normals, face_vertex_indices, world_points)?
        }
    };

    let projected = projector.project_points(world_points);
    let unprojectable = projected.iter().filter(|p| p.is_none()).count();

    ndc_debug!(
        "ndc::UvProjection",
        "{} points ({:?} normals), {} at or behind the camera plane",
        world_points.len(),
        normals.interpolation(),
        unprojectable
    );

    Ok(projected
        .into_iter()
        .zip(facing)
        .map(|(uv, ratio)| {
            let uv = uv.unwrap_or(config.unprojectable_uv);
            UvFacingSample {
                u: uv.u as f32,
                v: uv.v as f32,
                facing: ratio as f32,
            }
        })
        .collect())
}

/// Raw bytes of a sample array, for direct attribute upload.
pub fn samples_as_bytes(samples: &[UvFacingSample]) -> &[u8] {
    bytemuck::cast_slice(samples)
}

#[cfg(test)]
#[path = "uv_projection_tests.rs"]
mod tests;
