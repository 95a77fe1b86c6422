//! `croft-species` — the concrete farm world and its species behavior trees.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`world`]   | `FarmWorld` — the aggregate trees evaluate against      |
//! | [`profile`] | `SpeciesProfile`, `SpeciesProfiles`                     |
//! | [`wander`]  | the shared Wander action                                |
//! | [`farming`] | the farm-work tree (hoe → plant → water, else wander)   |
//! | [`flee`]    | the flee tree for threatened species                    |
//!
//! # Tree registration
//!
//! [`register_species_trees`] builds each `(species, mode)` tree once from a
//! [`SpeciesKind`] template; spawn code then assigns `TreeKey`s per agent and
//! the simulation builder verifies every assignment resolves before the
//! first tick.

pub mod farming;
pub mod flee;
pub mod profile;
pub mod wander;
pub mod world;


pub use profile::{FleeProfile, SpeciesProfile, SpeciesProfiles};
pub use world::{FarmWorld, PlayerRef};

use croft_behavior::{Node, TreeRegistry};
use croft_core::{BehaviorMode, SpeciesId, TreeKey};

/// The standard tree templates a species can be built from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SpeciesKind {
    /// Works the farm registry when the mood strikes, wanders otherwise.
    Farmer,
    /// Flees a nearby threat, wanders otherwise.  Also registers a
    /// pure-flee tree under [`BehaviorMode::Threatened`].
    Skittish,
    /// Wanders, nothing else.
    Drifter,
}

/// Build and register the trees for one species.
pub fn register_species_trees(
    registry: &mut TreeRegistry<FarmWorld>,
    species: SpeciesId,
    kind: SpeciesKind,
) {
    match kind {
        SpeciesKind::Farmer => {
            registry.insert(TreeKey::default_for(species), farming::farm_work_tree());
        }
        SpeciesKind::Skittish => {
            registry.insert(
                TreeKey::default_for(species),
                Node::selector(vec![flee::flee_tree(), wander::wander_action()]),
            );
            registry.insert(
                TreeKey::new(species, BehaviorMode::Threatened),
                flee::flee_tree(),
            );
        }
        SpeciesKind::Drifter => {
            registry.insert(TreeKey::default_for(species), wander::wander_action());
        }
    }
}
