//! Projection module — pinhole projection into normalized device coordinates.
//!
//! Provides the projector, its two output modes (aggregate window and
//! per-point array) and the write-back seam for data windows.

mod bounds;
mod ndc;
mod projector;
mod window;

pub use bounds::{Aabb, PlacedBounds, world_bounds};
pub use ndc::{NdcPoint, NdcWindow};
pub use projector::{PinholeProjector, ProjectionConfig, project_point};
pub use window::{
    DataWindowSink, TimeSampledWindow,
    compute_bounding_ndc_window, update_data_window,
};

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod bounds_tests;
