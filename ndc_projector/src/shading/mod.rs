//! Shading module
//!
//! Per-point camera shading attributes: facing ratio and camera-projected UVs.

mod facing_ratio;
mod uv_projection;

pub use facing_ratio::{NormalInterpolation, facing_ratio_vertex, facing_ratio_face_varying};
pub use uv_projection::{
    Normals, UvFacingSample,
    points_to_world, project_uv_facing, samples_as_bytes,
};
