//! Orbital Link host application.
//!
//! Runs the animation engine on its own thread at a fixed cadence and
//! exposes it through a command channel and a shared latest snapshot.

pub mod animation_loop;
pub mod config;
pub mod state;
