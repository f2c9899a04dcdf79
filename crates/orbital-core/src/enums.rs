//! Enumeration types used throughout the animator.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Operational status of a satellite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SatelliteStatus {
    #[default]
    Operational,
    Maintenance,
    Critical,
    Refueling,
    Offline,
}

impl SatelliteStatus {
    pub const ALL: [SatelliteStatus; 5] = [
        SatelliteStatus::Operational,
        SatelliteStatus::Maintenance,
        SatelliteStatus::Critical,
        SatelliteStatus::Refueling,
        SatelliteStatus::Offline,
    ];
}

/// Orbit tier. Determines ring radius and base angular speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrbitClass {
    /// Low Earth orbit: innermost ring, fastest.
    #[default]
    Leo,
    /// Medium Earth orbit.
    Meo,
    /// Geostationary orbit: outermost ring, slowest.
    Geo,
}

impl OrbitClass {
    pub const ALL: [OrbitClass; 3] = [OrbitClass::Leo, OrbitClass::Meo, OrbitClass::Geo];

    /// Base angular speed (degrees per unit of rotation).
    pub fn base_angular_speed(self) -> f64 {
        match self {
            OrbitClass::Leo => LEO_ANGULAR_SPEED,
            OrbitClass::Meo => MEO_ANGULAR_SPEED,
            OrbitClass::Geo => GEO_ANGULAR_SPEED,
        }
    }

    /// Ring offset from the Earth's edge (pixels).
    pub fn ring_offset(self) -> f64 {
        match self {
            OrbitClass::Leo => LEO_RING_OFFSET,
            OrbitClass::Meo => MEO_RING_OFFSET,
            OrbitClass::Geo => GEO_RING_OFFSET,
        }
    }

    /// Slot in per-class arrays (LEO = 0, MEO = 1, GEO = 2).
    pub fn index(self) -> usize {
        match self {
            OrbitClass::Leo => 0,
            OrbitClass::Meo => 1,
            OrbitClass::Geo => 2,
        }
    }
}

/// Per-satellite pointer interaction state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// No pending click.
    #[default]
    Idle,
    /// Clicked once; a second click within the window requests details.
    Tracked,
    /// Details requested; stays here until the detail view is dismissed.
    DetailRequested,
}

/// Tie-break rule when several satellites lie under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitPolicy {
    /// Closest satellite wins; equal distances go to the earlier one.
    #[default]
    Nearest,
    /// Later satellite in list order wins (legacy dashboard behaviour).
    LastMatch,
}

/// Operator actions available from the satellite detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorAction {
    /// Diagnostics run: restores a little health.
    RunDiagnostics,
    /// Tops up fuel and returns the satellite to operational.
    Refuel,
    /// Hands the satellite to manual control (maintenance).
    ManualControl,
    /// Uploads new firmware; the satellite goes into maintenance meanwhile.
    FirmwareUpdate,
    /// Takes the satellite offline.
    EmergencyRecall,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
