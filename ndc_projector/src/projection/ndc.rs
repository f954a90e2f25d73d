/// Normalized device coordinate outputs.
///
/// NDC here is the `[0, 1]` range with the origin at the lower-left corner of
/// the conformed film back, matching the host's data-window convention.

/// A projected point. Not clamped: points outside the frustum fall outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcPoint {
    pub u: f64,
    pub v: f64,
}

impl NdcPoint {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Frame centre (optical axis).
    pub const CENTER: NdcPoint = NdcPoint { u: 0.5, v: 0.5 };
}

/// Padded NDC bounding window; every component is clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcWindow {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl NdcWindow {
    /// Bounding window of `points`, grown by `padding` on every side and then
    /// clamped. Returns `None` when `points` is empty.
    pub fn from_points<I>(points: I, padding: f64) -> Option<Self>
    where
        I: IntoIterator<Item = NdcPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = (first.u, first.v, first.u, first.v);
        let (min_u, min_v, max_u, max_v) = iter.fold(init, |(lo_u, lo_v, hi_u, hi_v), p| {
            (lo_u.min(p.u), lo_v.min(p.v), hi_u.max(p.u), hi_v.max(p.v))
        });

        Some(Self {
            min_x: (min_u - padding).clamp(0.0, 1.0),
            min_y: (min_v - padding).clamp(0.0, 1.0),
            max_x: (max_u + padding).clamp(0.0, 1.0),
            max_y: (max_v + padding).clamp(0.0, 1.0),
        })
    }

    /// Width of the window in NDC units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the window in NDC units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True if `other` lies entirely within this window.
    pub fn contains(&self, other: &NdcWindow) -> bool {
        self.min_x <= other.min_x && self.max_x >= other.max_x
        && self.min_y <= other.min_y && self.max_y >= other.max_y
    }

    /// Host `Float4` layout: (min_x, min_y, max_x, max_y).
    pub fn to_array(&self) -> [f32; 4] {
        [
            self.min_x as f32,
            self.min_y as f32,
            self.max_x as f32,
            self.max_y as f32,
        ]
    }
}
