//! Fleet store: the ordered satellite list, backed by a hecs world.
//!
//! Each satellite is one entity carrying its `Satellite` record and a
//! `ListOrder`. List order is insertion order and drives the phase spread.

use std::collections::HashMap;

use hecs::{Entity, World};
use snafu::{ensure, OptionExt};

use orbital_core::constants::DIAGNOSTICS_HEALTH_GAIN;
use orbital_core::enums::{OperatorAction, SatelliteStatus};
use orbital_core::error::{
    DuplicateSatelliteSnafu, FleetError, InvalidDraftSnafu, InvalidSpeedSnafu,
    UnknownSatelliteSnafu,
};
use orbital_core::satellite::{
    clamp_vital, is_blank, is_valid_speed, Satellite, SatelliteDraft, SatellitePatch,
    TelemetryExport,
};
use orbital_core::state::FleetSummary;

/// Position of an entity in the satellite list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ListOrder(u64);

/// Ordered collection of satellites.
pub struct FleetStore {
    world: World,
    index: HashMap<String, Entity>,
    next_order: u64,
    next_id: u64,
}

impl Default for FleetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            index: HashMap::new(),
            next_order: 0,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Create a satellite from a draft and append it. Returns the new id.
    pub fn add(&mut self, draft: SatelliteDraft) -> Result<String, FleetError> {
        check_label("name", &draft.name)?;
        check_label("mission", &draft.mission)?;
        ensure!(is_valid_speed(draft.speed), InvalidSpeedSnafu { speed: draft.speed });
        let id = self.allocate_id();
        self.spawn(Satellite::from_draft(id.clone(), draft));
        Ok(id)
    }

    /// Append a fully formed record, keeping its id.
    pub fn insert(&mut self, mut satellite: Satellite) -> Result<(), FleetError> {
        ensure!(
            !self.contains(&satellite.id),
            DuplicateSatelliteSnafu { id: satellite.id.clone() }
        );
        check_label("name", &satellite.name)?;
        check_label("mission", &satellite.mission)?;
        ensure!(
            is_valid_speed(satellite.speed),
            InvalidSpeedSnafu { speed: satellite.speed }
        );
        satellite.fuel = clamp_vital(satellite.fuel);
        satellite.health = clamp_vital(satellite.health);
        self.spawn(satellite);
        Ok(())
    }

    /// Apply a partial update.
    pub fn update(&mut self, id: &str, patch: SatellitePatch) -> Result<(), FleetError> {
        if let Some(name) = &patch.name {
            check_label("name", name)?;
        }
        if let Some(mission) = &patch.mission {
            check_label("mission", mission)?;
        }
        if let Some(speed) = patch.speed {
            ensure!(is_valid_speed(speed), InvalidSpeedSnafu { speed });
        }
        let satellite = self.get_mut(id)?;
        satellite.apply(patch);
        Ok(())
    }

    /// Delete a satellite and return its record.
    pub fn remove(&mut self, id: &str) -> Result<Satellite, FleetError> {
        let entity = self.index.remove(id).context(UnknownSatelliteSnafu { id })?;
        let satellite = self
            .world
            .remove_one::<Satellite>(entity)
            .ok()
            .context(UnknownSatelliteSnafu { id })?;
        let _ = self.world.despawn(entity);
        Ok(satellite)
    }

    /// Run an operator action against a satellite.
    pub fn apply_action(&mut self, id: &str, action: OperatorAction) -> Result<(), FleetError> {
        let satellite = self.get_mut(id)?;
        match action {
            OperatorAction::RunDiagnostics => {
                satellite.health = clamp_vital(satellite.health + DIAGNOSTICS_HEALTH_GAIN);
            }
            OperatorAction::Refuel => {
                satellite.fuel = clamp_vital(100.0);
                satellite.status = SatelliteStatus::Operational;
            }
            OperatorAction::ManualControl | OperatorAction::FirmwareUpdate => {
                satellite.status = SatelliteStatus::Maintenance;
            }
            OperatorAction::EmergencyRecall => {
                satellite.status = SatelliteStatus::Offline;
            }
        }
        Ok(())
    }

    /// Copy of a single record.
    pub fn get(&self, id: &str) -> Option<Satellite> {
        let entity = *self.index.get(id)?;
        self.world
            .get::<&Satellite>(entity)
            .ok()
            .map(|satellite| (*satellite).clone())
    }

    /// Telemetry dump for one satellite.
    pub fn telemetry(&self, id: &str) -> Result<TelemetryExport, FleetError> {
        let satellite = self.get(id).context(UnknownSatelliteSnafu { id })?;
        Ok(TelemetryExport::from(&satellite))
    }

    /// All records in list order.
    pub fn ordered(&self) -> Vec<Satellite> {
        let mut rows: Vec<(ListOrder, Satellite)> = self
            .world
            .query::<(&ListOrder, &Satellite)>()
            .iter()
            .map(|(_, (order, satellite))| (*order, satellite.clone()))
            .collect();
        rows.sort_by_key(|(order, _)| *order);
        rows.into_iter().map(|(_, satellite)| satellite).collect()
    }

    /// Status counts and average vitals.
    pub fn summary(&self) -> FleetSummary {
        let mut summary = FleetSummary::default();
        let mut fuel_sum = 0.0;
        let mut health_sum = 0.0;

        for (_entity, satellite) in self.world.query::<&Satellite>().iter() {
            summary.total += 1;
            fuel_sum += satellite.fuel;
            health_sum += satellite.health;
            match satellite.status {
                SatelliteStatus::Operational => summary.operational += 1,
                SatelliteStatus::Maintenance => summary.maintenance += 1,
                SatelliteStatus::Critical => summary.critical += 1,
                SatelliteStatus::Refueling => summary.refueling += 1,
                SatelliteStatus::Offline => summary.offline += 1,
            }
        }

        if summary.total > 0 {
            summary.average_fuel = fuel_sum / summary.total as f64;
            summary.average_health = health_sum / summary.total as f64;
        }
        summary
    }

    fn spawn(&mut self, satellite: Satellite) {
        let order = ListOrder(self.next_order);
        self.next_order += 1;
        let id = satellite.id.clone();
        let entity = self.world.spawn((order, satellite));
        self.index.insert(id, entity);
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Satellite, FleetError> {
        let entity = *self.index.get(id).context(UnknownSatelliteSnafu { id })?;
        self.world
            .query_one_mut::<&mut Satellite>(entity)
            .ok()
            .context(UnknownSatelliteSnafu { id })
    }

    /// Next unused `sat-<n>` id. Ids are never reused.
    fn allocate_id(&mut self) -> String {
        loop {
            let id = format!("sat-{}", self.next_id);
            self.next_id += 1;
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

/// Names and mission labels must have visible text.
fn check_label(field: &str, text: &str) -> Result<(), FleetError> {
    ensure!(!is_blank(text), InvalidDraftSnafu { field });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use orbital_core::enums::OrbitClass;

    fn draft(name: &str) -> SatelliteDraft {
        SatelliteDraft::new(name, "Communications", OrbitClass::Leo)
    }

    #[test]
    fn test_add_assigns_sequential_ids_in_order() {
        let mut fleet = FleetStore::new();
        let a = fleet.add(draft("A")).unwrap();
        let b = fleet.add(draft("B")).unwrap();
        let c = fleet.add(draft("C")).unwrap();
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("sat-1", "sat-2", "sat-3"));

        let names: Vec<String> = fleet.ordered().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut fleet = FleetStore::new();
        fleet.add(draft("A")).unwrap();
        let b = fleet.add(draft("B")).unwrap();
        fleet.remove(&b).unwrap();
        let c = fleet.add(draft("C")).unwrap();
        assert_eq!(c, "sat-3");
    }

    #[test]
    fn test_add_skips_ids_taken_by_insert() {
        let mut fleet = FleetStore::new();
        let existing = Satellite::from_draft("sat-1".into(), draft("PRE"));
        fleet.insert(existing).unwrap();
        assert_eq!(fleet.add(draft("NEW")).unwrap(), "sat-2");
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut fleet = FleetStore::new();
        let sat = Satellite::from_draft("sat-7".into(), draft("X"));
        fleet.insert(sat.clone()).unwrap();
        assert_eq!(
            fleet.insert(sat),
            Err(FleetError::DuplicateSatellite { id: "sat-7".into() })
        );
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let mut fleet = FleetStore::new();
        assert!(matches!(
            fleet.add(draft("X").with_speed(0.0)),
            Err(FleetError::InvalidSpeed { .. })
        ));
        let id = fleet.add(draft("Y")).unwrap();
        let patch = SatellitePatch {
            speed: Some(-2.0),
            ..Default::default()
        };
        assert!(fleet.update(&id, patch).is_err());
        assert_eq!(fleet.get(&id).unwrap().speed, 1.0);
    }

    #[test]
    fn test_removal_preserves_order_of_the_rest() {
        let mut fleet = FleetStore::new();
        for name in ["A", "B", "C", "D"] {
            fleet.add(draft(name)).unwrap();
        }
        let removed = fleet.remove("sat-2").unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<String> = fleet.ordered().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
        assert_eq!(fleet.len(), 3);
    }

    #[test]
    fn test_unknown_ids_error() {
        let mut fleet = FleetStore::new();
        let unknown = FleetError::UnknownSatellite { id: "sat-99".into() };
        assert_eq!(fleet.remove("sat-99").unwrap_err(), unknown);
        assert_eq!(
            fleet.update("sat-99", SatellitePatch::default()).unwrap_err(),
            unknown
        );
        assert_eq!(
            fleet.apply_action("sat-99", OperatorAction::Refuel).unwrap_err(),
            unknown
        );
        assert!(fleet.get("sat-99").is_none());
    }

    #[test]
    fn test_operator_actions() {
        let mut fleet = FleetStore::new();
        let mut d = draft("X");
        d.fuel = 12.0;
        d.health = 97.0;
        d.status = SatelliteStatus::Critical;
        let id = fleet.add(d).unwrap();

        fleet.apply_action(&id, OperatorAction::RunDiagnostics).unwrap();
        assert_eq!(fleet.get(&id).unwrap().health, 100.0);

        fleet.apply_action(&id, OperatorAction::Refuel).unwrap();
        let sat = fleet.get(&id).unwrap();
        assert_eq!(sat.fuel, 100.0);
        assert_eq!(sat.status, SatelliteStatus::Operational);

        fleet.apply_action(&id, OperatorAction::ManualControl).unwrap();
        assert_eq!(fleet.get(&id).unwrap().status, SatelliteStatus::Maintenance);

        fleet.apply_action(&id, OperatorAction::EmergencyRecall).unwrap();
        assert_eq!(fleet.get(&id).unwrap().status, SatelliteStatus::Offline);

        fleet.apply_action(&id, OperatorAction::FirmwareUpdate).unwrap();
        let sat = fleet.get(&id).unwrap();
        assert_eq!(sat.status, SatelliteStatus::Maintenance);
        assert_eq!(sat.fuel, 100.0);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut fleet = FleetStore::new();
        let err = fleet.add(draft("   ")).unwrap_err();
        assert_eq!(err, FleetError::InvalidDraft { field: "name".into() });
        assert!(fleet.is_empty());
    }

    #[test]
    fn test_blank_mission_rejected() {
        let mut fleet = FleetStore::new();
        let mut d = draft("X");
        d.mission = "\t ".into();
        assert_eq!(
            fleet.add(d.clone()).unwrap_err(),
            FleetError::InvalidDraft { field: "mission".into() }
        );
        assert_eq!(
            fleet.insert(Satellite::from_draft("sat-5".into(), d)).unwrap_err(),
            FleetError::InvalidDraft { field: "mission".into() }
        );
        assert!(fleet.is_empty());
        // Rejected drafts do not burn an id.
        assert_eq!(fleet.add(draft("Y")).unwrap(), "sat-1");
    }

    #[test]
    fn test_whitespace_patch_rejected() {
        let mut fleet = FleetStore::new();
        let id = fleet.add(draft("KEEP")).unwrap();
        let patch = SatellitePatch {
            name: Some("  ".into()),
            health: Some(10.0),
            ..Default::default()
        };
        assert_eq!(
            fleet.update(&id, patch).unwrap_err(),
            FleetError::InvalidDraft { field: "name".into() }
        );
        let sat = fleet.get(&id).unwrap();
        assert_eq!(sat.name, "KEEP");
        assert_eq!(sat.health, 100.0);
    }

    #[test]
    fn test_telemetry_export() {
        let mut fleet = FleetStore::new();
        let mut d = draft("HUBBLE");
        d.fuel = 42.0;
        d.health = 88.0;
        let id = fleet.add(d).unwrap();

        let export = fleet.telemetry(&id).unwrap();
        assert_eq!(export.satellite, "HUBBLE");
        assert_eq!(export.fuel, 42.0);
        assert_eq!(export.health, 88.0);
        assert_eq!(export.orbit, OrbitClass::Leo);
        assert_eq!(export.mission, "Communications");

        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["orbit"], "LEO");
        assert!(fleet.telemetry("sat-99").is_err());
    }

    #[test]
    fn test_summary() {
        let mut fleet = FleetStore::new();
        assert_eq!(fleet.summary(), FleetSummary::default());

        let mut a = draft("A");
        a.fuel = 40.0;
        a.health = 80.0;
        let mut b = draft("B");
        b.fuel = 60.0;
        b.health = 100.0;
        b.status = SatelliteStatus::Critical;
        fleet.add(a).unwrap();
        fleet.add(b).unwrap();

        let summary = fleet.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.operational, 1);
        assert_eq!(summary.critical, 1);
        assert_relative_eq!(summary.average_fuel, 50.0);
        assert_relative_eq!(summary.average_health, 90.0);
    }
}
