//! Errors raised by fleet and geometry operations.

use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum FleetError {
    #[snafu(display("no satellite with id `{id}`"))]
    UnknownSatellite { id: String },
    #[snafu(display("a satellite with id `{id}` already exists"))]
    DuplicateSatellite { id: String },
    #[snafu(display("satellite {field} must not be blank"))]
    InvalidDraft { field: String },
    #[snafu(display("speed multiplier must be positive and finite, got {speed}"))]
    InvalidSpeed { speed: f64 },
    #[snafu(display("orbit radii must be positive and strictly increasing LEO < MEO < GEO, got {leo}, {meo}, {geo}"))]
    InvalidGeometry { leo: f64, meo: f64, geo: f64 },
    #[snafu(display("viewport must have positive finite size, got {width}x{height}"))]
    InvalidViewport { width: f64, height: f64 },
}
