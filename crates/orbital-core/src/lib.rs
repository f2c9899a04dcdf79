//! Core types and definitions for the Orbital Link fleet animator.
//!
//! This crate defines the vocabulary shared across the other crates:
//! the satellite record, commands, frame snapshots, events, errors and
//! constants. It has no dependency on any runtime or threading.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod satellite;
pub mod state;
pub mod types;
