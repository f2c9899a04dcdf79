//! Fundamental geometric and clock types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DT_MS};

/// Screen-space coordinate in the rendering surface (pixels, y down).
pub type ScreenPoint = DVec2;

/// Simulation clock.
///
/// `rotation` is the global animation counter fed into the position model;
/// it only advances while the animator is running. `tick` and `elapsed_ms`
/// always advance so that interaction windows are measured in host time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed host time in milliseconds.
    pub elapsed_ms: f64,
    /// Global rotation counter.
    pub rotation: f64,
}

impl SimClock {
    /// Advance host time by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += DT_MS;
    }

    /// Advance the rotation counter. Negative steps are ignored so the
    /// counter stays monotonic.
    pub fn rotate(&mut self, step: f64) {
        if step > 0.0 {
            self.rotation += step;
        }
    }
}

/// Size of the rendering surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Midpoint of the surface.
    pub fn center(&self) -> ScreenPoint {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Length of the shorter side.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Whether both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One point of a fading trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub position: ScreenPoint,
    /// Opacity in [0, 1]; highest at the satellite, 0 at the tail.
    pub opacity: f64,
}
