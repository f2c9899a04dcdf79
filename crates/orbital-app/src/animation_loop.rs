//! Animation loop thread: runs the orbit engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside the thread and never leaves it. Commands
//! arrive via `mpsc` channel. Snapshots go to a frame callback and to the
//! shared latest-snapshot slot for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};
use snafu::Snafu;

use orbital_core::commands::EngineCommand;
use orbital_core::constants::TICK_RATE;
use orbital_core::state::FrameSnapshot;
use orbital_sim::config::AnimatorConfig;
use orbital_sim::OrbitEngine;

use crate::state::{LoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Snafu)]
pub enum LoopError {
    #[snafu(display("animation loop is no longer running"))]
    Disconnected,
    #[snafu(display("animation loop thread panicked"))]
    Panicked,
}

/// How the loop is driven.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop on its own after this many ticks.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold the nominal cadence. Unpaced loops run
    /// as fast as the engine allows.
    pub paced: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: None,
            paced: true,
        }
    }
}

/// What the loop did before it exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    pub ticks: u64,
}

/// Owner of a running animation loop. Dropping it stops the loop.
pub struct AnimationHandle {
    command_tx: mpsc::Sender<LoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<LoopStats>>,
}

impl AnimationHandle {
    /// Forward a command to the engine.
    pub fn send(&self, command: EngineCommand) -> Result<(), LoopError> {
        self.command_tx
            .send(LoopCommand::Engine(command))
            .map_err(|_| LoopError::Disconnected)
    }

    pub fn latest_snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot.latest()
    }

    /// Handle onto the shared snapshot slot, for readers on other threads.
    pub fn shared_snapshot(&self) -> SharedSnapshot {
        self.latest_snapshot.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.thread
            .as_ref()
            .map_or(true, |thread| thread.is_finished())
    }

    /// Ask the loop to stop and wait for it.
    pub fn stop(mut self) -> Result<LoopStats, LoopError> {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        self.join_thread()
    }

    /// Wait for a loop started with `max_ticks` to finish on its own.
    pub fn join(mut self) -> Result<LoopStats, LoopError> {
        self.join_thread()
    }

    fn join_thread(&mut self) -> Result<LoopStats, LoopError> {
        let thread = self.thread.take().ok_or(LoopError::Disconnected)?;
        thread.join().map_err(|_| LoopError::Panicked)
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            let _ = self.command_tx.send(LoopCommand::Shutdown);
            let _ = self.join_thread();
        }
    }
}

/// Spawn a paced, unbounded loop.
pub fn spawn_animation_loop<F>(config: AnimatorConfig, on_frame: F) -> AnimationHandle
where
    F: FnMut(&FrameSnapshot) + Send + 'static,
{
    spawn_animation_loop_with(config, LoopOptions::default(), on_frame)
}

/// Spawn a loop in a new thread.
pub fn spawn_animation_loop_with<F>(
    config: AnimatorConfig,
    options: LoopOptions,
    on_frame: F,
) -> AnimationHandle
where
    F: FnMut(&FrameSnapshot) + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = SharedSnapshot::new();
    let shared = latest_snapshot.clone();

    let thread = std::thread::Builder::new()
        .name("orbital-animation-loop".into())
        .spawn(move || run_animation_loop(config, options, command_rx, &shared, on_frame))
        .expect("Failed to spawn animation loop thread");

    AnimationHandle {
        command_tx,
        latest_snapshot,
        thread: Some(thread),
    }
}

/// The loop. Runs until Shutdown, channel disconnect, or `max_ticks`.
fn run_animation_loop<F>(
    config: AnimatorConfig,
    options: LoopOptions,
    command_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
    mut on_frame: F,
) -> LoopStats
where
    F: FnMut(&FrameSnapshot),
{
    let mut engine = OrbitEngine::new(config);
    let mut stats = LoopStats { ticks: 0 };
    let mut next_tick_time = Instant::now();
    info!("animation loop started");

    loop {
        if options.max_ticks.is_some_and(|max| stats.ticks >= max) {
            info!("animation loop reached {} ticks", stats.ticks);
            return stats;
        }

        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Engine(command)) => engine.queue_command(command),
                Ok(LoopCommand::Shutdown) => {
                    info!("animation loop stopped after {} ticks", stats.ticks);
                    return stats;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return stats;
                }
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        stats.ticks += 1;

        // 3. Publish
        on_frame(&snapshot);
        latest_snapshot.store(snapshot);

        // 4. Sleep until the next tick
        if !options.paced {
            continue;
        }
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset rather than catch up
            next_tick_time = now;
        }
    }
}
