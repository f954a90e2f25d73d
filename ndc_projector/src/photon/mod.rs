//! Photon module
//!
//! Point-cloud photon density for caustics: each receiver point gathers the
//! nearest photon hits within a radius and accumulates a falloff weight.

mod photon_map;

pub use photon_map::PhotonMap;
