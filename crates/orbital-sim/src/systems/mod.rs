//! Per-tick systems run by the engine.
//!
//! Systems are plain functions over borrowed engine state. They hold no
//! state of their own.

pub mod motion;
pub mod snapshot;
