//! Unit tests for croft-agent.

use croft_core::{BehaviorMode, Facing, SpeciesId, TileCoord, TreeKey, Vec2, TILE_SIZE};

use crate::{AgentStoreBuilder, SpawnSpec};

fn one_agent() -> (crate::AgentStore, crate::AgentRngs) {
    let mut b = AgentStoreBuilder::new(7);
    b.spawn(
        SpawnSpec::new(SpeciesId(1), TileCoord::new(2, 3).center())
            .speed(100.0)
            .half_extents(Vec2::new(10.0, 6.0)),
    );
    b.build()
}

#[cfg(test)]
mod store {
    use super::*;
    use croft_core::AgentId;

    #[test]
    fn spawn_fills_soa_arrays() {
        let (store, rngs) = one_agent();
        assert_eq!(store.count, 1);
        assert_eq!(rngs.len(), 1);
        assert_eq!(store.species[0], SpeciesId(1));
        assert_eq!(store.base_speed[0], 100.0);
        assert!(store.collidable[0]);
        assert!(!store.fleeing[0]);
        assert_eq!(store.tree[0], TreeKey::default_for(SpeciesId(1)));
    }

    #[test]
    fn tile_of_tracks_position() {
        let (mut store, _) = one_agent();
        assert_eq!(store.tile_of(AgentId(0)), TileCoord::new(2, 3));
        store.position[0] = Vec2::new(5.5 * TILE_SIZE, 0.5 * TILE_SIZE);
        assert_eq!(store.tile_of(AgentId(0)), TileCoord::new(5, 0));
    }

    #[test]
    fn effective_speed_applies_boost() {
        let (mut store, _) = one_agent();
        assert_eq!(store.effective_speed(AgentId(0)), 100.0);
        store.speed_boost[0] = 1.5;
        assert_eq!(store.effective_speed(AgentId(0)), 150.0);
    }

    #[test]
    fn hitbox_centered_on_position() {
        let (store, _) = one_agent();
        let hb = store.hitbox(AgentId(0));
        let center = hb.center();
        assert!((center.x - store.position[0].x).abs() < 1e-4);
        assert!((center.y - store.position[0].y).abs() < 1e-4);
        assert!((hb.max.x - hb.min.x - 20.0).abs() < 1e-4);
    }

    #[test]
    fn face_toward_uses_dominant_axis() {
        let (mut store, _) = one_agent();
        // Target far to the right, slightly below.
        store.face_toward(AgentId(0), TileCoord::new(8, 4));
        assert_eq!(store.facing[0], Facing::Right);
        // Directly above.
        store.face_toward(AgentId(0), TileCoord::new(2, 0));
        assert_eq!(store.facing[0], Facing::Up);
    }
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut b = AgentStoreBuilder::new(0);
        let a = b.spawn(SpawnSpec::new(SpeciesId(0), Vec2::ZERO));
        let c = b.spawn(SpawnSpec::new(SpeciesId(0), Vec2::ZERO));
        assert_eq!(a.index(), 0);
        assert_eq!(c.index(), 1);
        assert_eq!(b.count(), 2);
    }

    #[test]
    fn custom_tree_assignment() {
        let mut b = AgentStoreBuilder::new(0);
        let key = TreeKey::new(SpeciesId(2), BehaviorMode::Threatened);
        let id = b.spawn(SpawnSpec::new(SpeciesId(2), Vec2::ZERO).tree(key));
        let (store, _) = b.build();
        assert_eq!(store.tree[id.index()], key);
    }
}
