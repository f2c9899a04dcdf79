//! Animation engine for Orbital Link.
//!
//! Owns the fleet store and interaction state, advances the rotation
//! counter at a fixed tick rate, and produces FrameSnapshots for the host.

pub mod config;
pub mod engine;
pub mod fleet;
pub mod mock;
pub mod orbit;
pub mod selection;
pub mod systems;
pub mod trail;

pub use orbital_core as core;
pub use engine::OrbitEngine;
