//! Camera module — intrinsics, extrinsics, conform policy and render target.
//!
//! Passive data containers built by the host from its scene state. The
//! crate never stores cameras: each evaluation snapshots one into an
//! [`EvaluationContext`] and discards it afterwards.

mod intrinsics;
mod extrinsics;
mod conform;
mod render_target;
mod context;

pub use intrinsics::CameraIntrinsics;
pub use extrinsics::CameraExtrinsics;
pub use conform::{ConformPolicy, EffectiveAperture, compute_effective_aperture};
pub use render_target::RenderTarget;
pub use context::EvaluationContext;

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
