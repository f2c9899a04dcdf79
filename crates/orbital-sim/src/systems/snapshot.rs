//! Snapshot system: assembles the FrameSnapshot handed to the host.
//!
//! Read-only with respect to the fleet and selection state.

use orbital_core::events::{Alert, InteractionEvent};
use orbital_core::satellite::Satellite;
use orbital_core::state::{FleetSummary, FrameSnapshot, SatelliteView};
use orbital_core::types::SimClock;

use crate::config::AnimatorConfig;
use crate::orbit::OrbitGeometry;
use crate::selection::ClickTracker;
use crate::systems::motion::Placement;
use crate::trail::{build_trail, peak_opacity};

/// Build a complete FrameSnapshot for one frame.
///
/// `placements` must be aligned with `satellites`.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    clock: SimClock,
    running: bool,
    time_scale: f64,
    config: &AnimatorConfig,
    geometry: &OrbitGeometry,
    satellites: &[Satellite],
    placements: &[Placement],
    selection: &ClickTracker,
    hovered: Option<&str>,
    summary: FleetSummary,
    events: Vec<InteractionEvent>,
    alerts: Vec<Alert>,
) -> FrameSnapshot {
    FrameSnapshot {
        clock,
        running,
        time_scale,
        geometry: geometry.view(),
        satellites: build_views(config, geometry, satellites, placements, selection, hovered),
        tracked: selection.tracked().map(str::to_string),
        hovered: hovered.map(str::to_string),
        details: selection.details().map(str::to_string),
        summary,
        events,
        alerts,
    }
}

fn build_views(
    config: &AnimatorConfig,
    geometry: &OrbitGeometry,
    satellites: &[Satellite],
    placements: &[Placement],
    selection: &ClickTracker,
    hovered: Option<&str>,
) -> Vec<SatelliteView> {
    satellites
        .iter()
        .zip(placements)
        .map(|(satellite, placement)| SatelliteView {
            id: satellite.id.clone(),
            name: satellite.name.clone(),
            status: satellite.status,
            orbit: satellite.orbit,
            fuel: satellite.fuel,
            health: satellite.health,
            position: placement.position,
            angle_deg: placement.angle_deg,
            trail: build_trail(
                geometry,
                satellite.orbit,
                placement.angle_deg,
                config.trail_samples_for(satellite.orbit),
                peak_opacity(satellite.status),
            ),
            hovered: hovered == Some(satellite.id.as_str()),
            tracked: selection.tracked() == Some(satellite.id.as_str()),
            selection: selection.state_of(&satellite.id),
        })
        .collect()
}
