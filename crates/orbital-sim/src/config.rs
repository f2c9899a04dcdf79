//! Animator configuration.

use serde::{Deserialize, Serialize};

use orbital_core::constants::*;
use orbital_core::enums::{HitPolicy, OrbitClass};
use orbital_core::types::Viewport;

/// Configuration for starting a new animator.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// RNG seed for the mock fleet. Same seed = same fleet.
    pub seed: u64,
    /// Populate the fleet with the seeded demo satellites.
    pub mock_fleet: bool,
    pub viewport: Viewport,
    /// Rotation counter increment per tick at 1x.
    pub rotation_step: f64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub hit_radius: f64,
    pub hit_policy: HitPolicy,
    pub click_window_ms: f64,
    /// Trail sample counts indexed LEO, MEO, GEO. Negative counts draw no
    /// trail; counts above `MAX_TRAIL_SAMPLES` are capped.
    pub trail_samples: [i32; 3],
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            mock_fleet: true,
            viewport: Viewport::default(),
            rotation_step: ROTATION_STEP,
            time_scale: 1.0,
            hit_radius: HIT_RADIUS,
            hit_policy: HitPolicy::default(),
            click_window_ms: CLICK_WINDOW_MS,
            trail_samples: [LEO_TRAIL_SAMPLES, MEO_TRAIL_SAMPLES, GEO_TRAIL_SAMPLES],
        }
    }
}

impl AnimatorConfig {
    /// Empty fleet, otherwise defaults.
    pub fn empty() -> Self {
        Self {
            mock_fleet: false,
            ..Default::default()
        }
    }

    pub fn trail_samples_for(&self, orbit: OrbitClass) -> i32 {
        self.trail_samples[orbit.index()]
    }
}
