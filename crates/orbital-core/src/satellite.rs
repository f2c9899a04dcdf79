//! The canonical satellite record and its creation/update payloads.
//!
//! The record carries no screen position: derived coordinates live in the
//! engine's side map, keyed by id.

use serde::{Deserialize, Serialize};

use crate::constants::{VITAL_MAX, VITAL_MIN};
use crate::enums::{OrbitClass, SatelliteStatus};

/// A tracked satellite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    pub id: String,
    pub name: String,
    pub status: SatelliteStatus,
    pub orbit: OrbitClass,
    /// Free-text mission label.
    pub mission: String,
    /// Fuel percentage, 0-100.
    pub fuel: f64,
    /// Health percentage, 0-100.
    pub health: f64,
    /// Angular speed multiplier (positive).
    pub speed: f64,
}

/// Everything needed to create a satellite except its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteDraft {
    pub name: String,
    #[serde(default)]
    pub status: SatelliteStatus,
    #[serde(default)]
    pub orbit: OrbitClass,
    #[serde(default)]
    pub mission: String,
    #[serde(default = "full_vital")]
    pub fuel: f64,
    #[serde(default = "full_vital")]
    pub health: f64,
    #[serde(default = "unit_speed")]
    pub speed: f64,
}

fn full_vital() -> f64 {
    VITAL_MAX
}

fn unit_speed() -> f64 {
    1.0
}

impl SatelliteDraft {
    /// A fresh, fully fuelled operational draft on the given orbit.
    pub fn new(name: impl Into<String>, mission: impl Into<String>, orbit: OrbitClass) -> Self {
        Self {
            name: name.into(),
            status: SatelliteStatus::Operational,
            orbit,
            mission: mission.into(),
            fuel: VITAL_MAX,
            health: VITAL_MAX,
            speed: 1.0,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }
}

/// Partial update. Only the fields that are `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SatellitePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SatelliteStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit: Option<OrbitClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// Clamp a fuel/health value into [0, 100]. NaN maps to 0.
pub fn clamp_vital(value: f64) -> f64 {
    if value.is_nan() {
        return VITAL_MIN;
    }
    value.clamp(VITAL_MIN, VITAL_MAX)
}

/// Whether a name or mission label is empty once trimmed.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Whether a speed multiplier is usable by the position model.
pub fn is_valid_speed(speed: f64) -> bool {
    speed.is_finite() && speed > 0.0
}

impl Satellite {
    /// Build a record from a draft. Vitals are clamped; speed is not
    /// validated here (the fleet store does that).
    pub fn from_draft(id: String, draft: SatelliteDraft) -> Self {
        Self {
            id,
            name: draft.name,
            status: draft.status,
            orbit: draft.orbit,
            mission: draft.mission,
            fuel: clamp_vital(draft.fuel),
            health: clamp_vital(draft.health),
            speed: draft.speed,
        }
    }

    /// Apply a partial update in place, clamping vitals.
    pub fn apply(&mut self, patch: SatellitePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(orbit) = patch.orbit {
            self.orbit = orbit;
        }
        if let Some(mission) = patch.mission {
            self.mission = mission;
        }
        if let Some(fuel) = patch.fuel {
            self.fuel = clamp_vital(fuel);
        }
        if let Some(health) = patch.health {
            self.health = clamp_vital(health);
        }
        if let Some(speed) = patch.speed {
            self.speed = speed;
        }
    }
}

/// Telemetry dump offered for download from the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryExport {
    /// Satellite name.
    pub satellite: String,
    pub fuel: f64,
    pub health: f64,
    pub orbit: OrbitClass,
    pub mission: String,
}

impl From<&Satellite> for TelemetryExport {
    fn from(satellite: &Satellite) -> Self {
        Self {
            satellite: satellite.name.clone(),
            fuel: satellite.fuel,
            health: satellite.health,
            orbit: satellite.orbit,
            mission: satellite.mission.clone(),
        }
    }
}
