/// Axis-aligned bounding boxes fed to the window computation.

use glam::{DMat4, DVec3};

/// Axis-Aligned Bounding Box
///
/// Boxes handed to the projector are in world space. Local-space boxes are
/// placed there with [`PlacedBounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: DVec3,
    /// Maximum corner (x, y, z)
    pub max: DVec3,
}

impl Aabb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// The 8 corners; x alternates fastest, then y, then z.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Tight axis-aligned box around this box after `matrix`.
    ///
    /// Moves the center, then sums the absolute linear columns weighted by
    /// the half extents (Arvo).
    pub fn transformed(&self, matrix: &DMat4) -> Aabb {
        let center = matrix.transform_point3((self.min + self.max) * 0.5);
        let half = (self.max - self.min) * 0.5;
        let reach = matrix.x_axis.truncate().abs() * half.x
            + matrix.y_axis.truncate().abs() * half.y
            + matrix.z_axis.truncate().abs() * half.z;

        Aabb {
            min: center - reach,
            max: center + reach,
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// An object's local-space box and the transform that places it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBounds {
    pub local: Aabb,
    pub local_to_world: DMat4,
}

impl PlacedBounds {
    pub fn new(local: Aabb, local_to_world: DMat4) -> Self {
        Self { local, local_to_world }
    }

    /// World-space box.
    pub fn world(&self) -> Aabb {
        self.local.transformed(&self.local_to_world)
    }
}

/// World boxes of every placed object, in input order.
///
/// This is the input [`compute_bounding_ndc_window`](super::compute_bounding_ndc_window)
/// expects.
pub fn world_bounds(objects: &[PlacedBounds]) -> Vec<Aabb> {
    objects.iter().map(PlacedBounds::world).collect()
}
