//! Render var selection for EXR compression
//!
//! DWAB compression is only applied to half-float AOVs. This module picks
//! those render vars out of a render product's var list and builds the
//! space-separated path pattern the host expects.

/// Render vars live under this path prefix.
pub const RENDER_VARS_PREFIX: &str = "/Render/Products/Vars/";

/// AOV formats stored as half floats.
pub const HALF_FLOAT_FORMATS: [&str; 2] = ["color4h", "color3h"];

/// A render var as read from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderVar {
    /// Prim path
    pub path: String,
    /// `driver:parameters:aov:format`, if authored
    pub aov_format: Option<String>,
}

impl RenderVar {
    pub fn new(path: impl Into<String>, aov_format: Option<&str>) -> Self {
        Self {
            path: path.into(),
            aov_format: aov_format.map(str::to_string),
        }
    }

    /// True if this var is under the render vars prefix and stored as half float.
    pub fn is_half_float(&self) -> bool {
        self.path.starts_with(RENDER_VARS_PREFIX)
            && self
                .aov_format
                .as_deref()
                .is_some_and(|format| HALF_FLOAT_FORMATS.contains(&format))
    }
}

/// Paths of the half-float render vars, in input order.
pub fn half_float_render_vars(vars: &[RenderVar]) -> Vec<&str> {
    vars.iter()
        .filter(|var| var.is_half_float())
        .map(|var| var.path.as_str())
        .collect()
}

/// Space-separated path pattern of the half-float render vars.
pub fn dwab_compression_pattern(vars: &[RenderVar]) -> String {
    let paths = half_float_render_vars(vars);
    crate::ndc_debug!(
        "ndc::RenderVars",
        "{} of {} render vars use a half-float format",
        paths.len(),
        vars.len()
    );
    paths.join(" ")
}

#[cfg(test)]
#[path = "render_vars_tests.rs"]
mod tests;
