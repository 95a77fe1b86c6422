//! Simulation observer trait for progress reporting and diagnostics.

use croft_core::{AgentId, TileCoord, Tick};
use croft_world::Interaction;

/// Per-agent events the driver reports as they happen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AgentEvent {
    /// A path ran to its end without interruption.
    PathCompleted,
    /// A path was cut short (collision, invalid start, unreachable target,
    /// or external cancel).
    PathAborted,
    /// A follow-up interaction was applied to the tile registry.
    Interacted {
        target: TileCoord,
        kind: Interaction,
    },
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — walk counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct WalkCounter { completed: usize }
///
/// impl SimObserver for WalkCounter {
///     fn on_agent_event(&mut self, _tick: Tick, _agent: AgentId, event: AgentEvent) {
///         if event == AgentEvent::PathCompleted {
///             self.completed += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent updates.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called whenever an agent's path terminates or a follow-up interaction
    /// lands.
    fn on_agent_event(&mut self, _tick: Tick, _agent: AgentId, _event: AgentEvent) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
