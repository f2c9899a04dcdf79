//! Fading trails drawn behind each satellite.
//!
//! A trail is recomputed from the current angle every frame; no history is kept.

use orbital_core::constants::{
    MAX_TRAIL_SAMPLES, TRAIL_ANGLE_STEP, TRAIL_DIM_FACTOR, TRAIL_PEAK_OPACITY,
};
use orbital_core::enums::{OrbitClass, SatelliteStatus};
use orbital_core::types::TrailSample;

use crate::orbit::{point_on_ring, OrbitGeometry};

/// Head opacity for a satellite's trail. Non-operational satellites draw dimmer.
pub fn peak_opacity(status: SatelliteStatus) -> f64 {
    match status {
        SatelliteStatus::Operational => TRAIL_PEAK_OPACITY,
        _ => TRAIL_PEAK_OPACITY * TRAIL_DIM_FACTOR,
    }
}

/// Sample a backward arc of `samples` points starting at the satellite.
///
/// Opacity falls linearly from `peak` at the head to 0 at the tail.
/// Negative sample counts yield an empty trail; counts above
/// `MAX_TRAIL_SAMPLES` are capped.
pub fn build_trail(
    geometry: &OrbitGeometry,
    orbit: OrbitClass,
    angle_deg: f64,
    samples: i32,
    peak: f64,
) -> Vec<TrailSample> {
    let count = samples.clamp(0, MAX_TRAIL_SAMPLES) as usize;
    let radius = geometry.radius(orbit);
    let head = angle_deg.to_radians();

    (0..count)
        .map(|i| {
            let fade = if count > 1 {
                1.0 - i as f64 / (count - 1) as f64
            } else {
                1.0
            };
            TrailSample {
                position: point_on_ring(geometry.center(), radius, head - i as f64 * TRAIL_ANGLE_STEP),
                opacity: peak * fade,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::orbit_position;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn geometry() -> OrbitGeometry {
        OrbitGeometry::with_radii(DVec2::new(300.0, 300.0), 100.0, 160.0, 220.0).unwrap()
    }

    #[test]
    fn test_trail_starts_at_satellite_and_fades_out() {
        let geometry = geometry();
        let trail = build_trail(&geometry, OrbitClass::Leo, 45.0, 20, 0.8);
        assert_eq!(trail.len(), 20);

        let head = orbit_position(&geometry, OrbitClass::Leo, 45.0);
        assert_relative_eq!(trail[0].position.x, head.x, epsilon = 1e-9);
        assert_relative_eq!(trail[0].position.y, head.y, epsilon = 1e-9);
        assert_relative_eq!(trail[0].opacity, 0.8, epsilon = 1e-12);
        assert_relative_eq!(trail[19].opacity, 0.0, epsilon = 1e-12);

        for pair in trail.windows(2) {
            assert!(pair[1].opacity < pair[0].opacity);
        }
    }

    #[test]
    fn test_trail_stays_on_ring_and_trails_backwards() {
        let geometry = geometry();
        let trail = build_trail(&geometry, OrbitClass::Meo, 0.0, 10, 1.0);
        for sample in &trail {
            assert_relative_eq!(sample.position.distance(geometry.center()), 160.0, epsilon = 1e-9);
        }
        // Angle 0 sits on +x; trailing samples swing toward -y (screen up).
        assert!(trail[1].position.y < trail[0].position.y);
    }

    #[test]
    fn test_negative_and_zero_counts_are_empty() {
        let geometry = geometry();
        assert!(build_trail(&geometry, OrbitClass::Geo, 10.0, -4, 0.8).is_empty());
        assert!(build_trail(&geometry, OrbitClass::Geo, 10.0, 0, 0.8).is_empty());
    }

    #[test]
    fn test_oversized_count_is_capped() {
        let trail = build_trail(&geometry(), OrbitClass::Leo, 10.0, 5_000_000, 0.8);
        assert_eq!(trail.len(), MAX_TRAIL_SAMPLES as usize);
        assert_relative_eq!(trail[trail.len() - 1].opacity, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_sample_keeps_peak() {
        let trail = build_trail(&geometry(), OrbitClass::Geo, 10.0, 1, 0.4);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].opacity, 0.4);
    }

    #[test]
    fn test_peak_opacity_by_status() {
        assert_eq!(peak_opacity(SatelliteStatus::Operational), TRAIL_PEAK_OPACITY);
        assert!(peak_opacity(SatelliteStatus::Critical) < TRAIL_PEAK_OPACITY);
        assert_eq!(
            peak_opacity(SatelliteStatus::Offline),
            peak_opacity(SatelliteStatus::Maintenance)
        );
    }
}
