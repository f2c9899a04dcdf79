//! Commands sent from the host to the animator.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::OperatorAction;
use crate::satellite::{SatelliteDraft, SatellitePatch};

/// All host-driven actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineCommand {
    // --- Pointer ---
    /// Pointer moved over the surface (local coordinates).
    PointerMove { x: f64, y: f64 },
    /// Pointer clicked on the surface (local coordinates).
    Click { x: f64, y: f64 },
    /// Close the detail view. `keep_tracking` leaves the satellite tracked.
    DismissDetails { keep_tracking: bool },

    // --- Fleet ---
    /// Add a satellite to the end of the list.
    AddSatellite { draft: SatelliteDraft },
    /// Apply a partial update to a satellite.
    UpdateSatellite { id: String, patch: SatellitePatch },
    /// Delete a satellite.
    RemoveSatellite { id: String },
    /// Run an operator action against a satellite.
    OperatorAction { id: String, action: OperatorAction },

    // --- Simulation control ---
    /// Freeze the rotation counter.
    Pause,
    /// Resume the rotation counter.
    Resume,
    /// Set rotation time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    /// The rendering surface changed size.
    Resize { width: f64, height: f64 },
}
