use crate::error::Error;
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_attributes_all_present() {
    let cam = CameraIntrinsics::from_attributes(Some(50.0), Some(36.0), Some(24.0)).unwrap();
    assert_eq!(cam, CameraIntrinsics::new(50.0, 36.0, 24.0));
}

#[test]
fn test_from_attributes_missing_value() {
    let result = CameraIntrinsics::from_attributes(Some(50.0), None, Some(24.0));
    assert!(matches!(result, Err(Error::ConfigurationError(_))));

    let result = CameraIntrinsics::from_attributes(None, Some(36.0), Some(24.0));
    assert!(matches!(result, Err(Error::ConfigurationError(_))));
}

#[test]
fn test_from_attributes_zero_aperture_is_configuration_error() {
    let result = CameraIntrinsics::from_attributes(Some(50.0), Some(36.0), Some(0.0));
    match result {
        Err(Error::ConfigurationError(msg)) => assert!(msg.contains("vertical aperture")),
        other => panic!("expected ConfigurationError, got {:?}", other),
    }
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_rejects_non_positive_and_non_finite() {
    assert!(CameraIntrinsics::new(0.0, 36.0, 24.0).validate().is_err());
    assert!(CameraIntrinsics::new(50.0, -36.0, 24.0).validate().is_err());
    assert!(CameraIntrinsics::new(f64::NAN, 36.0, 24.0).validate().is_err());
    assert!(CameraIntrinsics::new(50.0, 36.0, f64::INFINITY).validate().is_err());
}

#[test]
fn test_validate_accepts_usual_camera() {
    assert!(CameraIntrinsics::new(50.0, 36.0, 24.0).validate().is_ok());
}

// ============================================================================
// aspect
// ============================================================================

#[test]
fn test_aspect() {
    let cam = CameraIntrinsics::new(50.0, 36.0, 24.0);
    assert_eq!(cam.aspect().unwrap(), 1.5);
}

#[test]
fn test_aspect_zero_height_is_division_error() {
    let cam = CameraIntrinsics::new(50.0, 36.0, 0.0);
    assert!(matches!(cam.aspect(), Err(Error::DivisionError(_))));
}
