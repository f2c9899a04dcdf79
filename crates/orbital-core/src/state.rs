//! Frame snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{Alert, InteractionEvent};
use crate::types::{ScreenPoint, SimClock, TrailSample};

/// Complete animator state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub clock: SimClock,
    pub running: bool,
    pub time_scale: f64,
    pub geometry: GeometryView,
    /// One view per satellite, in list order.
    pub satellites: Vec<SatelliteView>,
    pub tracked: Option<String>,
    pub hovered: Option<String>,
    /// Satellite whose detail view is open, if any.
    pub details: Option<String>,
    pub summary: FleetSummary,
    pub events: Vec<InteractionEvent>,
    pub alerts: Vec<Alert>,
}

/// Ring layout for drawing the Earth and orbit rings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryView {
    pub center: ScreenPoint,
    pub earth_radius: f64,
    /// Ring radii indexed LEO, MEO, GEO.
    pub ring_radii: [f64; 3],
}

/// A satellite as drawn on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteView {
    pub id: String,
    pub name: String,
    pub status: SatelliteStatus,
    pub orbit: OrbitClass,
    pub fuel: f64,
    pub health: f64,
    pub position: ScreenPoint,
    /// Current orbital angle in degrees (unwrapped).
    pub angle_deg: f64,
    /// Trail samples from head to tail.
    pub trail: Vec<TrailSample>,
    pub hovered: bool,
    pub tracked: bool,
    pub selection: SelectionState,
}

/// Aggregate fleet statistics for the overview panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total: u32,
    pub operational: u32,
    pub maintenance: u32,
    pub critical: u32,
    pub refueling: u32,
    pub offline: u32,
    /// Mean fuel across the fleet (0 when empty).
    pub average_fuel: f64,
    /// Mean health across the fleet (0 when empty).
    pub average_health: f64,
}

impl FleetSummary {
    /// Count for a single status.
    pub fn count(&self, status: SatelliteStatus) -> u32 {
        match status {
            SatelliteStatus::Operational => self.operational,
            SatelliteStatus::Maintenance => self.maintenance,
            SatelliteStatus::Critical => self.critical,
            SatelliteStatus::Refueling => self.refueling,
            SatelliteStatus::Offline => self.offline,
        }
    }
}
