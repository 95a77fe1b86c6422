//! The transient per-evaluation handle.

use croft_core::{AgentId, Vec2};

/// Identifies which agent a tree evaluation is acting for, plus the reference
/// position of a distinguished threat where one exists (e.g., the player for
/// flee logic).
///
/// Stateless and `Copy`: a fresh `Context` is made for every evaluation and
/// carries no results out of it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Context {
    /// The acting agent.
    pub agent: AgentId,
    /// Position of the threat reference, used only for distance comparisons.
    pub threat: Option<Vec2>,
}

impl Context {
    #[inline]
    pub fn new(agent: AgentId) -> Self {
        Self {
            agent,
            threat: None,
        }
    }

    #[inline]
    pub fn with_threat(agent: AgentId, threat: Option<Vec2>) -> Self {
        Self { agent, threat }
    }
}
