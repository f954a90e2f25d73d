/// EvaluationContext — everything one evaluation needs about the camera.
///
/// Built by the host from its scene state at a given time and passed
/// explicitly to projector entry points. Nothing reads "the current frame"
/// from global state.

use super::extrinsics::CameraExtrinsics;
use super::intrinsics::CameraIntrinsics;
use super::render_target::RenderTarget;

/// Camera and render target snapshot at one evaluation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationContext {
    /// Evaluation time (frame) the snapshot was taken at
    pub time: f64,
    /// Focal length and film back
    pub intrinsics: CameraIntrinsics,
    /// Camera world transform
    pub extrinsics: CameraExtrinsics,
    /// Output resolution and conform policy
    pub render_target: RenderTarget,
}

impl EvaluationContext {
    pub fn new(
        time: f64,
        intrinsics: CameraIntrinsics,
        extrinsics: CameraExtrinsics,
        render_target: RenderTarget,
    ) -> Self {
        Self {
            time,
            intrinsics,
            extrinsics,
            render_target,
        }
    }
}
