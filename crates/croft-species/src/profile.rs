//! Per-species behavior tuning, shared and stateless across all agents of a
//! species.

use std::collections::HashMap;

use croft_core::{CroftError, CroftResult, SpeciesId};

/// Flee behavior parameters for threatened species.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FleeProfile {
    /// Distance (tiles) at which the threat condition trips.
    pub trigger_radius_tiles: f32,
    /// Speed multiplier applied while the flee path is active.
    pub speed_boost: f32,
    /// How many tiles away the flee action aims.
    pub flee_distance: i32,
    /// Search window for flee paths — tighter than the species' normal
    /// config, so panic routing stays cheap.
    pub search_radius: i32,
}

impl Default for FleeProfile {
    fn default() -> Self {
        Self {
            trigger_radius_tiles: 2.5,
            speed_boost: 1.6,
            flee_distance: 4,
            search_radius: 5,
        }
    }
}

/// Behavior tuning for one species.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpeciesProfile {
    /// Chebyshev radius of the wander sampling window.
    pub wander_radius: i32,
    /// Dwell range (secs) after a completed path.
    pub complete_dwell: (f32, f32),
    /// Chance per tree run that a farmer works instead of wandering.
    pub farm_chance: f64,
    /// Chance that starting *new* farmland yields while partially-worked
    /// tiles exist — the soft "finish what you started" priority.
    pub finish_first_bias: f64,
    /// Present for species that flee a threat.
    pub flee: Option<FleeProfile>,
}

impl Default for SpeciesProfile {
    fn default() -> Self {
        Self {
            wander_radius: 5,
            complete_dwell: (1.0, 3.0),
            farm_chance: 1.0 / 3.0,
            finish_first_bias: 0.5,
            flee: None,
        }
    }
}

impl SpeciesProfile {
    pub fn with_flee(mut self, flee: FleeProfile) -> Self {
        self.flee = Some(flee);
        self
    }

    pub fn with_wander_radius(mut self, radius: i32) -> Self {
        self.wander_radius = radius;
        self
    }

    pub fn with_complete_dwell(mut self, range: (f32, f32)) -> Self {
        self.complete_dwell = range;
        self
    }
}

/// The species → profile table.  One shared entry per species; agents never
/// carry per-instance copies.
#[derive(Default)]
pub struct SpeciesProfiles {
    map: HashMap<SpeciesId, SpeciesProfile>,
}

impl SpeciesProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, species: SpeciesId, profile: SpeciesProfile) {
        self.map.insert(species, profile);
    }

    pub fn get(&self, species: SpeciesId) -> Option<&SpeciesProfile> {
        self.map.get(&species)
    }

    /// The profile for `species`, or `CroftError::SpeciesNotFound` — used by
    /// the simulation builder to fail fast at startup.
    pub fn require(&self, species: SpeciesId) -> CroftResult<&SpeciesProfile> {
        self.get(species).ok_or(CroftError::SpeciesNotFound(species))
    }

    pub fn contains(&self, species: SpeciesId) -> bool {
        self.map.contains_key(&species)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
