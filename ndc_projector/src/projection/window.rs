/// Bounding NDC data window of a set of world-space boxes.
///
/// The host stores the result as a time-sampled `Float4` on its render
/// settings; that write goes through [`DataWindowSink`].

use crate::camera::EvaluationContext;
use crate::error::Result;
use crate::{ndc_err, ndc_info};
use super::bounds::Aabb;
use super::ndc::NdcWindow;
use super::projector::PinholeProjector;

/// Compute the padded data window of `world_bounds` as seen from `ctx`.
///
/// Returns `Ok(None)` if no box corner lies in front of the camera: the
/// objects are out of frame at `ctx.time`, which is not an error.
///
/// # Errors
///
/// `ConfigurationError` for degenerate camera or render settings, or for a
/// negative / non-finite padding. Nothing is computed in that case.
pub fn compute_bounding_ndc_window(
    ctx: &EvaluationContext,
    world_bounds: &[Aabb],
    padding: f64,
) -> Result<Option<NdcWindow>> {
    if !padding.is_finite() || padding < 0.0 {
        return Err(ndc_err!(
            "ndc::Projector",
            ConfigurationError,
            "Padding must be finite and >= 0 (got {})",
            padding
        ));
    }

    let projector = PinholeProjector::from_context(ctx)?;
    let window = projector.window_of(world_bounds, padding);

    if window.is_none() {
        ndc_info!(
            "ndc::Projector",
            "Objects are not visible in camera frustum at time {}",
            ctx.time
        );
    }

    Ok(window)
}

/// Host-side destination for computed data windows.
pub trait DataWindowSink {
    /// Store `window` as the value at `time`.
    fn write_window(&mut self, time: f64, window: NdcWindow) -> Result<()>;
}

/// Compute the data window and write it to `sink` at `ctx.time`.
///
/// When nothing is visible the sink is left untouched (the prior value
/// stays) and `Ok(None)` is returned.
pub fn update_data_window<S: DataWindowSink + ?Sized>(
    ctx: &EvaluationContext,
    world_bounds: &[Aabb],
    padding: f64,
    sink: &mut S,
) -> Result<Option<NdcWindow>> {
    let Some(window) = compute_bounding_ndc_window(ctx, world_bounds, padding)? else {
        return Ok(None);
    };

    sink.write_window(ctx.time, window)?;

    ndc_info!(
        "ndc::Projector",
        "Time {}: dataWindowNDC = ({}, {}, {}, {})",
        ctx.time,
        window.min_x,
        window.min_y,
        window.max_x,
        window.max_y
    );

    Ok(Some(window))
}

/// In-memory time-sampled window attribute.
///
/// One sample per time; writing an existing time replaces it. Samples are
/// kept sorted by time.
#[derive(Debug, Clone, Default)]
pub struct TimeSampledWindow {
    samples: Vec<(f64, NdcWindow)>,
}

impl TimeSampledWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample at exactly `time`, if any.
    pub fn get(&self, time: f64) -> Option<NdcWindow> {
        self.samples
            .iter()
            .find(|(t, _)| *t == time)
            .map(|(_, window)| *window)
    }

    /// All samples, sorted by time.
    pub fn samples(&self) -> &[(f64, NdcWindow)] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl DataWindowSink for TimeSampledWindow {
    fn write_window(&mut self, time: f64, window: NdcWindow) -> Result<()> {
        if !time.is_finite() {
            return Err(ndc_err!(
                "ndc::TimeSampledWindow",
                InvalidInput,
                "Sample time must be finite (got {})",
                time
            ));
        }
        match self.samples.binary_search_by(|(t, _)| t.total_cmp(&time)) {
            Ok(index) => self.samples[index].1 = window,
            Err(index) => self.samples.insert(index, (time, window)),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
