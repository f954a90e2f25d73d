/*!
# NDC Projector

Camera-projection and shading utilities for host-driven scene evaluation.

Each operation is a closed-form computation over typed inputs: the host
(a node-graph callback, a render-settings hook, etc.) reads its scene data,
builds the input types defined here, calls one operation and persists the
result itself.

## Architecture

- **PinholeProjector**: world point -> normalized device coordinates, with
  aspect-ratio conform between camera film back and render target
- **compute_bounding_ndc_window**: padded NDC data window of a set of boxes
- **project_uv_facing**: per-point (u, v, facing ratio) shading samples
- **PhotonMap**: radius-limited photon density accumulation
- **render_vars**: half-float AOV selection for DWAB compression

Geometry is double precision throughout (`glam::DVec3`, `glam::DMat4`).
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod camera;
pub mod projection;
pub mod shading;
pub mod photon;
pub mod render_vars;

// Main ndc namespace module
pub mod ndc {
    // Error types
    pub use crate::error::{Error, Result};

    // Process-wide logger slot
    pub use crate::diagnostics::Diagnostics;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Projection sub-module
    pub mod projection {
        pub use crate::projection::*;
    }

    // Shading sub-module
    pub mod shading {
        pub use crate::shading::*;
    }

    // Photon sub-module
    pub mod photon {
        pub use crate::photon::*;
    }

    // Render var sub-module
    pub mod render_vars {
        pub use crate::render_vars::*;
    }
}

// Re-export math library at crate root
pub use glam;
