use glam::{DMat4, DVec3};
use crate::error::Error;
use super::*;

// ============================================================================
// RenderTarget
// ============================================================================

#[test]
fn test_render_target_defaults_to_expand() {
    let target = RenderTarget::new(1920, 1080);
    assert_eq!(target.conform_policy, ConformPolicy::ExpandAperture);
    assert!((target.aspect().unwrap() - 16.0 / 9.0).abs() < 1e-12);
}

#[test]
fn test_render_target_with_policy() {
    let target = RenderTarget::new(2048, 858).with_conform_policy(ConformPolicy::CropAperture);
    assert_eq!(target.conform_policy, ConformPolicy::CropAperture);
    assert_eq!(target.width, 2048);
}

#[test]
fn test_render_target_zero_height_is_configuration_error() {
    let target = RenderTarget::new(1920, 0);
    match target.aspect() {
        Err(Error::ConfigurationError(msg)) => assert!(msg.contains("zero height")),
        other => panic!("expected ConfigurationError, got {:?}", other),
    }
}

#[test]
fn test_render_target_zero_width_gives_zero_aspect() {
    // Rejected later by compute_effective_aperture as a DivisionError
    let target = RenderTarget::new(0, 1080);
    assert_eq!(target.aspect().unwrap(), 0.0);
    let result = compute_effective_aperture(
        &CameraIntrinsics::new(50.0, 36.0, 24.0),
        target.aspect().unwrap(),
        target.conform_policy,
    );
    assert!(matches!(result, Err(Error::DivisionError(_))));
}

// ============================================================================
// EvaluationContext
// ============================================================================

#[test]
fn test_evaluation_context_snapshot() {
    let extrinsics = CameraExtrinsics::new(DMat4::from_translation(DVec3::new(0.0, 1.0, 10.0))).unwrap();
    let ctx = EvaluationContext::new(
        1001.0,
        CameraIntrinsics::new(50.0, 36.0, 24.0),
        extrinsics,
        RenderTarget::new(1920, 1080),
    );

    assert_eq!(ctx.time, 1001.0);
    assert_eq!(ctx.extrinsics.position(), DVec3::new(0.0, 1.0, 10.0));
    assert_eq!(ctx.render_target.height, 1080);
}
