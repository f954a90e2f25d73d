/// PhotonMap — uniform-grid spatial hash over photon hit positions.
///
/// Each photon lives in exactly one grid cell; a radius query visits the
/// cells overlapping the query sphere's bounding box. When that box spans
/// more cells than are occupied, the occupied cells are scanned instead.

use rustc_hash::FxHashMap;
use glam::DVec3;
use crate::error::Result;
use crate::{ndc_debug, ndc_err};

type CellKey = (i64, i64, i64);

/// Static spatial index of photon positions.
pub struct PhotonMap {
    positions: Vec<DVec3>,
    cell_size: f64,
    cells: FxHashMap<CellKey, Vec<u32>>,
}

impl PhotonMap {
    /// Build the grid.
    ///
    /// `cell_size` is best close to the typical query radius.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if `cell_size` is not finite and positive, or if
    /// there are more photons than a `u32` index can address.
    pub fn new(positions: Vec<DVec3>, cell_size: f64) -> Result<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ndc_err!(
                "ndc::PhotonMap",
                ConfigurationError,
                "Cell size must be finite and > 0 (got {})",
                cell_size
            ));
        }
        if positions.len() > u32::MAX as usize {
            return Err(ndc_err!(
                "ndc::PhotonMap",
                ConfigurationError,
                "Too many photons ({})",
                positions.len()
            ));
        }

        let mut cells: FxHashMap<CellKey, Vec<u32>> = FxHashMap::default();
        for (index, position) in positions.iter().enumerate() {
            cells
                .entry(Self::cell_of(*position, cell_size))
                .or_default()
                .push(index as u32);
        }

        ndc_debug!(
            "ndc::PhotonMap",
            "{} photons in {} cells (cell size {})",
            positions.len(),
            cells.len(),
            cell_size
        );

        Ok(Self {
            positions,
            cell_size,
            cells,
        })
    }

    fn cell_of(position: DVec3, cell_size: f64) -> CellKey {
        let c = (position / cell_size).floor();
        (c.x as i64, c.y as i64, c.z as i64)
    }

    /// Number of photons.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Photon positions, in insertion order.
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Up to `max_samples` photons within `radius` (inclusive) of `position`,
    /// nearest first, as `(index, distance)` pairs.
    pub fn nearest_within(&self, position: DVec3, radius: f64, max_samples: usize) -> Vec<(u32, f64)> {
        let mut found = Vec::new();
        if max_samples == 0 || !radius.is_finite() || radius <= 0.0 {
            return found;
        }

        let lo = Self::cell_of(position - DVec3::splat(radius), self.cell_size);
        let hi = Self::cell_of(position + DVec3::splat(radius), self.cell_size);
        // Saturates: far cell keys clamp to i64 bounds, so one span alone can reach 2^64.
        let span = |a: i64, b: i64| (b as i128 - a as i128 + 1) as u128;
        let visited_cells = span(lo.0, hi.0)
            .saturating_mul(span(lo.1, hi.1))
            .saturating_mul(span(lo.2, hi.2));

        let mut consider = |indices: &[u32]| {
            for &index in indices {
                let distance = self.positions[index as usize].distance(position);
                if distance <= radius {
                    found.push((index, distance));
                }
            }
        };

        if visited_cells > self.cells.len() as u128 {
            for indices in self.cells.values() {
                consider(indices);
            }
        } else {
            for x in lo.0..=hi.0 {
                for y in lo.1..=hi.1 {
                    for z in lo.2..=hi.2 {
                        if let Some(indices) = self.cells.get(&(x, y, z)) {
                            consider(indices);
                        }
                    }
                }
            }
        }

        found.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        found.truncate(max_samples);
        found
    }

    /// Photon density at `position`.
    ///
    /// Gathers up to `max_samples` nearest photons within `radius`, weights
    /// each by the linear falloff `1 - d / radius`, and normalizes the sum by
    /// `max_samples` (the maximum possible weight count). Returns 0 when
    /// `max_samples` is 0 or `radius` is not finite and positive.
    pub fn accumulate(&self, position: DVec3, radius: f64, max_samples: usize) -> f64 {
        let found = self.nearest_within(position, radius, max_samples);
        if found.is_empty() {
            return 0.0;
        }

        let accum: f64 = found
            .iter()
            .map(|(_, distance)| 1.0 - (distance / radius).clamp(0.0, 1.0))
            .sum();

        accum / max_samples as f64
    }

    /// [`accumulate`](Self::accumulate) for every receiver point.
    pub fn accumulate_all(&self, receivers: &[DVec3], radius: f64, max_samples: usize) -> Vec<f64> {
        receivers
            .iter()
            .map(|p| self.accumulate(*p, radius, max_samples))
            .collect()
    }
}

#[cfg(test)]
#[path = "photon_map_tests.rs"]
mod tests;
