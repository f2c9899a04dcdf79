//! State shared between the host and the animation loop thread.

use std::sync::{Arc, Mutex};

use orbital_core::commands::EngineCommand;
use orbital_core::state::FrameSnapshot;

/// Messages sent from the host to the animation loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Forward to the engine's command queue.
    Engine(EngineCommand),
    /// Stop the loop after the current tick.
    Shutdown,
}

impl From<EngineCommand> for LoopCommand {
    fn from(command: EngineCommand) -> Self {
        LoopCommand::Engine(command)
    }
}

/// Latest snapshot, written by the loop thread after every tick.
///
/// `None` until the first tick completes.
#[derive(Debug, Clone, Default)]
pub struct SharedSnapshot {
    inner: Arc<Mutex<Option<FrameSnapshot>>>,
}

impl SharedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, snapshot: FrameSnapshot) {
        if let Ok(mut lock) = self.inner.lock() {
            *lock = Some(snapshot);
        }
    }

    /// Clone of the latest snapshot. A poisoned lock reads as empty.
    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.inner.lock().ok().and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = SharedSnapshot::new();
        assert!(shared.latest().is_none());
    }

    #[test]
    fn test_store_is_visible_through_clones() {
        let shared = SharedSnapshot::new();
        let reader = shared.clone();
        let mut snapshot = FrameSnapshot::default();
        snapshot.clock.tick = 7;
        shared.store(snapshot);
        assert_eq!(reader.latest().map(|s| s.clock.tick), Some(7));
    }

    #[test]
    fn test_engine_command_converts() {
        let command: LoopCommand = EngineCommand::Pause.into();
        assert!(matches!(command, LoopCommand::Engine(EngineCommand::Pause)));
    }
}
