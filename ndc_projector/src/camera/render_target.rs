/// RenderTarget — output resolution and conform policy of a render product.

use crate::error::Result;
use crate::ndc_err;
use super::conform::ConformPolicy;

/// Render resolution in pixels plus the aspect-ratio conform policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTarget {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// How camera/render aspect mismatches are resolved
    pub conform_policy: ConformPolicy,
}

impl RenderTarget {
    /// Create a render target with the default policy (`ExpandAperture`).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            conform_policy: ConformPolicy::default(),
        }
    }

    /// Override the conform policy.
    pub fn with_conform_policy(mut self, policy: ConformPolicy) -> Self {
        self.conform_policy = policy;
        self
    }

    /// Pixel aspect of the whole frame (width / height).
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if the height is zero.
    pub fn aspect(&self) -> Result<f64> {
        if self.height == 0 {
            return Err(ndc_err!(
                "ndc::RenderTarget",
                ConfigurationError,
                "Render resolution has a zero height ({}x{})",
                self.width,
                self.height
            ));
        }
        Ok(self.width as f64 / self.height as f64)
    }
}
