//! Orbit engine: the single mutator of animator state.
//!
//! `OrbitEngine` owns the clock, the fleet store, the position side map and
//! the selection tracker. It processes host commands at tick boundaries,
//! runs the per-tick systems, and produces `FrameSnapshot`s. Completely
//! headless (no thread, no timer), so it can be driven directly by tests.

use std::collections::{HashMap, VecDeque};

use glam::DVec2;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orbital_core::commands::EngineCommand;
use orbital_core::constants::MAX_TIME_SCALE;
use orbital_core::enums::{AlertLevel, OperatorAction};
use orbital_core::error::FleetError;
use orbital_core::events::{Alert, InteractionEvent};
use orbital_core::satellite::TelemetryExport;
use orbital_core::state::FrameSnapshot;
use orbital_core::types::{ScreenPoint, SimClock, Viewport};

use crate::config::AnimatorConfig;
use crate::fleet::FleetStore;
use crate::hit_test::{hit_test, HitCandidate};
use crate::mock::generate_mock_fleet;
use crate::orbit::OrbitGeometry;
use crate::selection::ClickTracker;
use crate::systems;

/// The animator. Owns all state; nothing is global.
pub struct OrbitEngine {
    config: AnimatorConfig,
    clock: SimClock,
    running: bool,
    time_scale: f64,
    geometry: OrbitGeometry,
    fleet: FleetStore,
    /// Last computed position per satellite id.
    positions: HashMap<String, ScreenPoint>,
    selection: ClickTracker,
    hovered: Option<String>,
    command_queue: VecDeque<EngineCommand>,
    events: Vec<InteractionEvent>,
    alerts: Vec<Alert>,
}

impl OrbitEngine {
    /// Create an engine. With `mock_fleet` set, the fleet is seeded from
    /// `config.seed`.
    pub fn new(config: AnimatorConfig) -> Self {
        let geometry = OrbitGeometry::from_viewport(config.viewport).unwrap_or_else(|err| {
            warn!("{err}; falling back to the default viewport");
            OrbitGeometry::default()
        });

        let mut fleet = FleetStore::new();
        if config.mock_fleet {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            for satellite in generate_mock_fleet(&mut rng) {
                if let Err(err) = fleet.insert(satellite) {
                    warn!("skipping mock satellite: {err}");
                }
            }
            info!("seeded mock fleet of {} satellites (seed {})", fleet.len(), config.seed);
        }

        Self {
            clock: SimClock::default(),
            running: true,
            time_scale: sanitize_time_scale(config.time_scale).unwrap_or(1.0),
            geometry,
            fleet,
            positions: HashMap::new(),
            selection: ClickTracker::new(config.click_window_ms),
            hovered: None,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            alerts: Vec::new(),
            config,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: EngineCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = EngineCommand>) {
        self.command_queue.extend(commands);
    }

    /// Run one frame and return its snapshot.
    ///
    /// The frame is rendered at the current rotation; the rotation counter
    /// then advances (when running) and host time always advances.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();

        let expired = self.selection.expire(self.clock.elapsed_ms);
        self.events.extend(expired);

        let satellites = self.fleet.ordered();
        let placements = systems::motion::run(
            &satellites,
            self.clock.rotation,
            &self.geometry,
            &mut self.positions,
        );

        let snapshot = systems::snapshot::build_snapshot(
            self.clock,
            self.running,
            self.time_scale,
            &self.config,
            &self.geometry,
            &satellites,
            &placements,
            &self.selection,
            self.hovered.as_deref(),
            self.fleet.summary(),
            std::mem::take(&mut self.events),
            std::mem::take(&mut self.alerts),
        );

        if self.running {
            self.clock.rotate(self.config.rotation_step * self.time_scale);
        }
        self.clock.advance();

        snapshot
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn geometry(&self) -> &OrbitGeometry {
        &self.geometry
    }

    pub fn fleet(&self) -> &FleetStore {
        &self.fleet
    }

    pub fn selection(&self) -> &ClickTracker {
        &self.selection
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Telemetry dump for the detail view's download button.
    pub fn telemetry(&self, id: &str) -> Result<TelemetryExport, FleetError> {
        self.fleet.telemetry(id)
    }

    /// Last computed position of a satellite, if it has been placed.
    pub fn position_of(&self, id: &str) -> Option<ScreenPoint> {
        self.positions.get(id).copied()
    }

    /// Satellite under a pointer coordinate, using last computed positions.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<String> {
        let satellites = self.fleet.ordered();
        let candidates = satellites.iter().map(|satellite| HitCandidate {
            id: satellite.id.as_str(),
            position: self.positions.get(&satellite.id).copied(),
        });
        hit_test(
            candidates,
            DVec2::new(x, y),
            self.config.hit_radius,
            self.config.hit_policy,
        )
        .map(str::to_string)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            debug!("tick {}: {:?}", self.clock.tick, command);
            if let Err(err) = self.handle_command(command) {
                warn!("tick {}: command rejected: {err}", self.clock.tick);
                self.alerts.push(Alert {
                    level: AlertLevel::Warning,
                    message: err.to_string(),
                    tick: self.clock.tick,
                });
            }
        }
    }

    fn handle_command(&mut self, command: EngineCommand) -> Result<(), FleetError> {
        let now_ms = self.clock.elapsed_ms;
        match command {
            EngineCommand::PointerMove { x, y } => {
                self.hovered = self.hit_test(x, y);
            }
            EngineCommand::Click { x, y } => {
                let hit = self.hit_test(x, y);
                let events = self.selection.click(hit.as_deref(), now_ms);
                self.events.extend(events);
            }
            EngineCommand::DismissDetails { keep_tracking } => {
                if let Some(event) = self.selection.dismiss(keep_tracking, now_ms) {
                    self.events.push(event);
                }
            }
            EngineCommand::AddSatellite { draft } => {
                let id = self.fleet.add(draft)?;
                info!("added satellite {id}");
                self.events.push(InteractionEvent::SatelliteAdded { id });
            }
            EngineCommand::UpdateSatellite { id, patch } => {
                self.fleet.update(&id, patch)?;
                self.events.push(InteractionEvent::SatelliteUpdated { id });
            }
            EngineCommand::RemoveSatellite { id } => {
                self.fleet.remove(&id)?;
                self.selection.forget(&id);
                self.positions.remove(&id);
                if self.hovered.as_deref() == Some(id.as_str()) {
                    self.hovered = None;
                }
                info!("removed satellite {id}");
                self.events.push(InteractionEvent::SatelliteRemoved { id });
            }
            EngineCommand::OperatorAction { id, action } => {
                self.fleet.apply_action(&id, action)?;
                info!("{action:?} on {id}");
                let name = self.fleet.get(&id).map(|satellite| satellite.name).unwrap_or_default();
                let (level, message) = action_alert(action, &name);
                self.alerts.push(Alert {
                    level,
                    message,
                    tick: self.clock.tick,
                });
                if action == OperatorAction::EmergencyRecall
                    && self.selection.details() == Some(id.as_str())
                {
                    if let Some(event) = self.selection.dismiss(false, now_ms) {
                        self.events.push(event);
                    }
                }
                self.events.push(InteractionEvent::SatelliteUpdated { id });
            }
            EngineCommand::Pause => {
                if self.running {
                    self.running = false;
                    info!("animation paused at rotation {:.1}", self.clock.rotation);
                }
            }
            EngineCommand::Resume => {
                if !self.running {
                    self.running = true;
                    info!("animation resumed");
                }
            }
            EngineCommand::SetTimeScale { scale } => {
                if let Some(scale) = sanitize_time_scale(scale) {
                    self.time_scale = scale;
                }
            }
            EngineCommand::Resize { width, height } => {
                self.geometry = OrbitGeometry::from_viewport(Viewport::new(width, height))?;
                self.config.viewport = Viewport::new(width, height);
            }
        }
        Ok(())
    }
}

/// Operator feedback for a completed action.
fn action_alert(action: OperatorAction, name: &str) -> (AlertLevel, String) {
    match action {
        OperatorAction::RunDiagnostics => {
            (AlertLevel::Info, format!("Diagnostics complete for {name}"))
        }
        OperatorAction::Refuel => (AlertLevel::Info, format!("Refuel complete for {name}")),
        OperatorAction::ManualControl => {
            (AlertLevel::Info, format!("Manual control engaged for {name}"))
        }
        OperatorAction::FirmwareUpdate => {
            (AlertLevel::Info, format!("Firmware update initiated for {name}"))
        }
        OperatorAction::EmergencyRecall => {
            (AlertLevel::Critical, format!("Emergency recall initiated for {name}"))
        }
    }
}

/// Clamp a time scale into [0, MAX_TIME_SCALE]. NaN is rejected.
fn sanitize_time_scale(scale: f64) -> Option<f64> {
    if scale.is_nan() {
        return None;
    }
    Some(scale.clamp(0.0, MAX_TIME_SCALE))
}
