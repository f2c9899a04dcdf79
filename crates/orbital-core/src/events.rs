//! Events emitted by the animator for host feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;

/// Interaction and fleet events produced during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InteractionEvent {
    /// First click on a satellite: it is now tracked.
    Tracked { id: String },
    /// Second click inside the window: host should open the detail view.
    DetailsRequested { id: String },
    /// Click window elapsed without a second click.
    ClickWindowExpired { id: String },
    /// Click on empty space cleared the tracked satellite.
    Deselected,
    /// Detail view closed.
    DetailsDismissed { id: String },
    SatelliteAdded { id: String },
    SatelliteUpdated { id: String },
    SatelliteRemoved { id: String },
}

/// Alert for the host's notification area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
