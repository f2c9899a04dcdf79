//! Motion system: places every satellite on its ring for the current frame.

use std::collections::HashMap;

use orbital_core::satellite::Satellite;
use orbital_core::types::ScreenPoint;

use crate::orbit::{orbit_angle_deg, orbit_position, OrbitGeometry};

/// Where a satellite sits this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Unwrapped orbital angle in degrees.
    pub angle_deg: f64,
    pub position: ScreenPoint,
}

/// Compute placements for `satellites` (in list order) at `rotation` and
/// rewrite the position side map. Ids no longer in the list are dropped.
pub fn run(
    satellites: &[Satellite],
    rotation: f64,
    geometry: &OrbitGeometry,
    positions: &mut HashMap<String, ScreenPoint>,
) -> Vec<Placement> {
    positions.clear();
    let population = satellites.len();

    satellites
        .iter()
        .enumerate()
        .map(|(index, satellite)| {
            let angle_deg =
                orbit_angle_deg(rotation, satellite.orbit, satellite.speed, index, population);
            let position = orbit_position(geometry, satellite.orbit, angle_deg);
            positions.insert(satellite.id.clone(), position);
            Placement {
                angle_deg,
                position,
            }
        })
        .collect()
}
