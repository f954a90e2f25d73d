/// Facing ratio — how directly a surface faces the camera.
///
/// `ratio = clamp(dot(normal, normalize(camera - point)), 0, 1)`. Normals are
/// used as supplied; unnormalized input normals scale the ratio before the
/// clamp, as the host's own shading does.

use glam::DVec3;
use crate::error::Result;
use crate::ndc_err;

/// Where normals are stored on a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalInterpolation {
    /// One normal per point
    #[default]
    Vertex,
    /// One normal per face-vertex (corner)
    FaceVarying,
}

impl NormalInterpolation {
    /// Parse the host interpolation token. A missing token defaults to
    /// `Vertex`; any token other than `vertex` is treated as face-varying.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None | Some("vertex") => NormalInterpolation::Vertex,
            Some(_) => NormalInterpolation::FaceVarying,
        }
    }
}

fn facing(camera_pos: DVec3, normal: DVec3, point: DVec3) -> f64 {
    let view = (camera_pos - point).normalize_or_zero();
    normal.dot(view).clamp(0.0, 1.0)
}

/// Facing ratio per point, with one normal per point.
///
/// # Errors
///
/// `InvalidInput` if `normals` and `points` differ in length.
pub fn facing_ratio_vertex(
    camera_pos: DVec3,
    normals: &[DVec3],
    points: &[DVec3],
) -> Result<Vec<f64>> {
    if normals.len() != points.len() {
        return Err(ndc_err!(
            "ndc::FacingRatio",
            InvalidInput,
            "{} vertex normals for {} points",
            normals.len(),
            points.len()
        ));
    }

    Ok(normals
        .iter()
        .zip(points)
        .map(|(n, p)| facing(camera_pos, *n, *p))
        .collect())
}

/// Facing ratio per point, from one normal per face-vertex.
///
/// Each face-vertex ratio is computed at the point it references, then the
/// ratios are averaged per point. Points no face references get 0.
///
/// # Errors
///
/// `InvalidInput` if `normals` and `face_vertex_indices` differ in length,
/// or if an index is outside `points`.
pub fn facing_ratio_face_varying(
    camera_pos: DVec3,
    normals: &[DVec3],
    face_vertex_indices: &[u32],
    points: &[DVec3],
) -> Result<Vec<f64>> {
    if normals.len() != face_vertex_indices.len() {
        return Err(ndc_err!(
            "ndc::FacingRatio",
            InvalidInput,
            "{} face-varying normals for {} face-vertex indices",
            normals.len(),
            face_vertex_indices.len()
        ));
    }

    let mut accum = vec![0.0f64; points.len()];
    let mut count = vec![0u32; points.len()];

    for (normal, &index) in normals.iter().zip(face_vertex_indices) {
        let i = index as usize;
        let Some(point) = points.get(i) else {
            return Err(ndc_err!(
                "ndc::FacingRatio",
                InvalidInput,
                "Face-vertex index {} out of range for {} points",
                index,
                points.len()
            ));
        };
        accum[i] += facing(camera_pos, *normal, *point);
        count[i] += 1;
    }

    Ok(accum
        .into_iter()
        .zip(count)
        .map(|(sum, n)| if n == 0 { 0.0 } else { sum / n as f64 })
        .collect())
}

#[cfg(test)]
#[path = "facing_ratio_tests.rs"]
mod tests;
