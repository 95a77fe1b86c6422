//! Behavior mode enum and the `(species, mode)` tree-lookup key.
//!
//! Trees are fixed and fully defined before any agent runs; a key that does
//! not resolve in the registry is a programming error surfaced at startup,
//! not at tick time.

use std::fmt;

use crate::SpeciesId;

/// Which of a species' behavior trees currently drives an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum BehaviorMode {
    /// Everyday behavior (wander, farm work, flee-when-startled).
    #[default]
    Default,
    /// Sustained-threat behavior, for species that distinguish it.
    Threatened,
}

impl BehaviorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorMode::Default => "default",
            BehaviorMode::Threatened => "threatened",
        }
    }
}

impl fmt::Display for BehaviorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry key selecting one constructed behavior tree.
///
/// Also the value of each agent's "assigned tree" slot, set once by spawn
/// code and validated when the simulation is built.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeKey {
    pub species: SpeciesId,
    pub mode: BehaviorMode,
}

impl TreeKey {
    #[inline]
    pub fn new(species: SpeciesId, mode: BehaviorMode) -> Self {
        Self { species, mode }
    }

    /// The default-mode key for a species — what spawn code usually assigns.
    #[inline]
    pub fn default_for(species: SpeciesId) -> Self {
        Self { species, mode: BehaviorMode::Default }
    }
}

impl fmt::Display for TreeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.species, self.mode)
    }
}
