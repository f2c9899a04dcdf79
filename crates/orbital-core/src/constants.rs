//! Animator constants and tuning parameters.

/// Animation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds of host time per tick.
pub const DT_MS: f64 = 1000.0 / TICK_RATE as f64;

/// Rotation counter increment per tick at 1x time scale.
pub const ROTATION_STEP: f64 = 0.3;

/// Upper bound for the time scale multiplier.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Viewport ---

/// Default surface width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1200.0;

/// Default surface height in pixels (the dashboard canvas is 600px tall).
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

/// Earth radius as a fraction of the shorter viewport side.
pub const EARTH_RADIUS_FRACTION: f64 = 0.15;

// --- Orbit rings ---

/// Ring offset from the Earth's edge for LEO (pixels).
pub const LEO_RING_OFFSET: f64 = 60.0;

/// Ring offset from the Earth's edge for MEO (pixels).
pub const MEO_RING_OFFSET: f64 = 120.0;

/// Ring offset from the Earth's edge for GEO (pixels).
pub const GEO_RING_OFFSET: f64 = 180.0;

/// Base angular speed for LEO (degrees per rotation unit).
pub const LEO_ANGULAR_SPEED: f64 = 1.2;

/// Base angular speed for MEO (degrees per rotation unit).
pub const MEO_ANGULAR_SPEED: f64 = 0.8;

/// Base angular speed for GEO (degrees per rotation unit).
pub const GEO_ANGULAR_SPEED: f64 = 0.3;

// --- Trails ---

/// Angular spacing between trail samples (radians).
pub const TRAIL_ANGLE_STEP: f64 = 0.05;

/// Trail sample count for LEO.
pub const LEO_TRAIL_SAMPLES: i32 = 20;

/// Trail sample count for MEO.
pub const MEO_TRAIL_SAMPLES: i32 = 15;

/// Trail sample count for GEO.
pub const GEO_TRAIL_SAMPLES: i32 = 10;

/// Upper bound on samples per trail, whatever the configuration asks for.
pub const MAX_TRAIL_SAMPLES: i32 = 64;

/// Opacity of the trail head for an operational satellite.
pub const TRAIL_PEAK_OPACITY: f64 = 0.8;

/// Multiplier applied to the peak opacity for any non-operational status.
pub const TRAIL_DIM_FACTOR: f64 = 0.5;

// --- Interaction ---

/// Pointer hit radius around a satellite (pixels, inclusive).
pub const HIT_RADIUS: f64 = 15.0;

/// Window for the second click that requests details (milliseconds, inclusive).
pub const CLICK_WINDOW_MS: f64 = 3000.0;

// --- Fleet ---

/// Lower bound for fuel and health.
pub const VITAL_MIN: f64 = 0.0;

/// Upper bound for fuel and health.
pub const VITAL_MAX: f64 = 100.0;

/// Health restored by a diagnostics run.
pub const DIAGNOSTICS_HEALTH_GAIN: f64 = 5.0;

/// Default RNG seed for the mock fleet.
pub const DEFAULT_SEED: u64 = 42;

/// Number of mock satellites that always start operational.
pub const MOCK_OPERATIONAL_COUNT: usize = 8;

/// Mock speed multiplier range (lower inclusive, upper exclusive).
pub const MOCK_SPEED_MIN: f64 = 0.5;
pub const MOCK_SPEED_MAX: f64 = 2.0;

/// Mock fuel range (integers, lower inclusive, upper exclusive).
pub const MOCK_FUEL_MIN: u32 = 20;
pub const MOCK_FUEL_MAX: u32 = 100;

/// Mock health range (integers, lower inclusive, upper exclusive).
pub const MOCK_HEALTH_MIN: u32 = 70;
pub const MOCK_HEALTH_MAX: u32 = 100;
