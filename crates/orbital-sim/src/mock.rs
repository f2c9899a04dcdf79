//! Seeded mock fleet used when the host supplies no satellites.

use rand::Rng;

use orbital_core::constants::*;
use orbital_core::enums::{OrbitClass, SatelliteStatus};
use orbital_core::satellite::Satellite;

/// Names of the demo fleet, in list order.
pub const MOCK_NAMES: [&str; 12] = [
    "TERRA-1",
    "AQUA-2",
    "LANDSAT-8",
    "HUBBLE",
    "ISS",
    "GOES-16",
    "SENTINEL-2",
    "NOAA-20",
    "JASON-3",
    "GRACE-FO",
    "TESS",
    "KEPLER",
];

/// Mission labels drawn at random.
pub const MOCK_MISSIONS: [&str; 6] = [
    "Earth Observation",
    "Communications",
    "Scientific Research",
    "Weather Monitoring",
    "Navigation",
    "Space Exploration",
];

/// Generate the demo fleet. The first `MOCK_OPERATIONAL_COUNT` satellites
/// are operational; the rest get a random status.
pub fn generate_mock_fleet(rng: &mut impl Rng) -> Vec<Satellite> {
    MOCK_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let status = if index < MOCK_OPERATIONAL_COUNT {
                SatelliteStatus::Operational
            } else {
                SatelliteStatus::ALL[rng.gen_range(0..SatelliteStatus::ALL.len())]
            };
            let orbit = OrbitClass::ALL[rng.gen_range(0..OrbitClass::ALL.len())];
            let mission = MOCK_MISSIONS[rng.gen_range(0..MOCK_MISSIONS.len())];

            Satellite {
                id: format!("sat-{}", index + 1),
                name: (*name).to_string(),
                status,
                orbit,
                mission: mission.to_string(),
                fuel: rng.gen_range(MOCK_FUEL_MIN..MOCK_FUEL_MAX) as f64,
                health: rng.gen_range(MOCK_HEALTH_MIN..MOCK_HEALTH_MAX) as f64,
                speed: rng.gen_range(MOCK_SPEED_MIN..MOCK_SPEED_MAX),
            }
        })
        .collect()
}
