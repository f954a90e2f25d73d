use glam::{DMat4, DVec3};
use super::{Aabb, NdcPoint, NdcWindow, PlacedBounds, world_bounds};

// ============================================================================
// Aabb
// ============================================================================

#[test]
fn test_corners_order() {
    let aabb = Aabb::new(DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 2.0, 3.0));
    let corners = aabb.corners();

    assert_eq!(corners[0], DVec3::new(0.0, 0.0, 0.0));
    assert_eq!(corners[1], DVec3::new(1.0, 0.0, 0.0));
    assert_eq!(corners[2], DVec3::new(0.0, 2.0, 0.0));
    assert_eq!(corners[3], DVec3::new(1.0, 2.0, 0.0));
    assert_eq!(corners[4], DVec3::new(0.0, 0.0, 3.0));
    assert_eq!(corners[7], DVec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_from_points() {
    let aabb = Aabb::from_points([
        DVec3::new(1.0, -2.0, 0.5),
        DVec3::new(-1.0, 3.0, 0.0),
        DVec3::new(0.0, 0.0, 4.0),
    ])
    .unwrap();

    assert_eq!(aabb.min, DVec3::new(-1.0, -2.0, 0.0));
    assert_eq!(aabb.max, DVec3::new(1.0, 3.0, 4.0));
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

#[test]
fn test_transformed_translation() {
    let aabb = Aabb::new(DVec3::splat(-1.0), DVec3::splat(1.0));
    let moved = aabb.transformed(&DMat4::from_translation(DVec3::new(0.0, 0.0, -10.0)));

    assert_eq!(moved.min, DVec3::new(-1.0, -1.0, -11.0));
    assert_eq!(moved.max, DVec3::new(1.0, 1.0, -9.0));
}

#[test]
fn test_transformed_rotation_matches_corner_bounds() {
    let aabb = Aabb::new(DVec3::new(-1.0, -0.5, -2.0), DVec3::new(2.0, 0.5, 1.0));
    let matrix = DMat4::from_rotation_y(0.7) * DMat4::from_scale(DVec3::new(2.0, 1.0, 0.5));

    let arvo = aabb.transformed(&matrix);
    let brute = Aabb::from_points(aabb.corners().map(|c| matrix.transform_point3(c))).unwrap();

    assert!(arvo.min.abs_diff_eq(brute.min, 1e-12));
    assert!(arvo.max.abs_diff_eq(brute.max, 1e-12));
}

#[test]
fn test_transformed_scaled_translation() {
    let aabb = Aabb::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(3.0, 4.0, 5.0));
    let matrix = DMat4::from_scale_rotation_translation(
        DVec3::new(-2.0, 1.0, 3.0),
        glam::DQuat::IDENTITY,
        DVec3::new(10.0, 0.0, 0.0),
    );
    let moved = aabb.transformed(&matrix);

    assert_eq!(moved.min, DVec3::new(4.0, 2.0, 9.0));
    assert_eq!(moved.max, DVec3::new(8.0, 4.0, 15.0));
}

#[test]
fn test_world_bounds_places_each_object() {
    let unit = Aabb::new(DVec3::splat(-0.5), DVec3::splat(0.5));
    let objects = [
        PlacedBounds::new(unit, DMat4::from_translation(DVec3::new(-1.0, 0.0, 0.0))),
        PlacedBounds::new(unit, DMat4::from_rotation_z(std::f64::consts::FRAC_PI_4)),
    ];

    let world = world_bounds(&objects);
    assert_eq!(world.len(), 2);
    assert_eq!(world[0], Aabb::new(DVec3::new(-1.5, -0.5, -0.5), DVec3::new(-0.5, 0.5, 0.5)));

    let half_diagonal = std::f64::consts::FRAC_1_SQRT_2;
    assert!(world[1].max.abs_diff_eq(DVec3::new(half_diagonal, half_diagonal, 0.5), 1e-12));
    assert_eq!(objects[1].world(), world[1]);
    assert!(world_bounds(&[]).is_empty());
}

#[test]
fn test_union() {
    let a = Aabb::new(DVec3::ZERO, DVec3::ONE);
    let b = Aabb::new(DVec3::splat(-1.0), DVec3::splat(0.5));
    let merged = a.union(&b);
    assert_eq!(merged.min, DVec3::splat(-1.0));
    assert_eq!(merged.max, DVec3::ONE);
}

// ============================================================================
// NdcWindow
// ============================================================================

#[test]
fn test_window_from_points_clamps_after_padding() {
    let window = NdcWindow::from_points(
        [NdcPoint::new(0.02, 0.4), NdcPoint::new(0.9, 0.6), NdcPoint::new(-0.3, 0.5)],
        0.05,
    )
    .unwrap();

    assert_eq!(window.min_x, 0.0);
    assert!((window.min_y - 0.35).abs() < 1e-12);
    assert!((window.max_x - 0.95).abs() < 1e-12);
    assert!((window.max_y - 0.65).abs() < 1e-12);
}

#[test]
fn test_window_from_no_points() {
    assert!(NdcWindow::from_points(Vec::new(), 0.1).is_none());
}

#[test]
fn test_window_extent_and_contains() {
    let outer = NdcWindow { min_x: 0.1, min_y: 0.1, max_x: 0.9, max_y: 0.7 };
    let inner = NdcWindow { min_x: 0.2, min_y: 0.2, max_x: 0.5, max_y: 0.5 };

    assert!((outer.width() - 0.8).abs() < 1e-12);
    assert!((outer.height() - 0.6).abs() < 1e-12);
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
}

#[test]
fn test_window_to_array() {
    let window = NdcWindow { min_x: 0.25, min_y: 0.0, max_x: 1.0, max_y: 0.5 };
    assert_eq!(window.to_array(), [0.25f32, 0.0, 1.0, 0.5]);
}
