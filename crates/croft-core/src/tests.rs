//! Unit tests for croft-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, PlotId, SpeciesId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(SpeciesId(100) > SpeciesId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(SpeciesId::INVALID.0, u16::MAX);
        assert_eq!(PlotId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod mode {
    use crate::{BehaviorMode, SpeciesId, TreeKey};

    #[test]
    fn default_key() {
        let key = TreeKey::default_for(SpeciesId(3));
        assert_eq!(key.mode, BehaviorMode::Default);
        assert_eq!(key.species, SpeciesId(3));
    }

    #[test]
    fn keys_hash_distinctly() {
        let a = TreeKey::new(SpeciesId(0), BehaviorMode::Default);
        let b = TreeKey::new(SpeciesId(0), BehaviorMode::Threatened);
        assert_ne!(a, b);
    }

    #[test]
    fn display() {
        let key = TreeKey::new(SpeciesId(1), BehaviorMode::Threatened);
        assert_eq!(key.to_string(), "SpeciesId(1)/threatened");
    }
}

#[cfg(test)]
mod space {
    use crate::{Facing, Rect, TileCoord, Vec2, TILE_SIZE};

    #[test]
    fn pixel_to_tile_floor() {
        assert_eq!(Vec2::new(0.0, 0.0).tile(), TileCoord::new(0, 0));
        assert_eq!(Vec2::new(TILE_SIZE - 0.1, 0.0).tile(), TileCoord::new(0, 0));
        assert_eq!(Vec2::new(TILE_SIZE, 0.0).tile(), TileCoord::new(1, 0));
        // Negative pixel positions floor toward the off-map tile, not zero.
        assert_eq!(Vec2::new(-0.1, 0.0).tile(), TileCoord::new(-1, 0));
    }

    #[test]
    fn tile_center_roundtrip() {
        let tile = TileCoord::new(3, 7);
        assert_eq!(tile.center().tile(), tile);
    }

    #[test]
    fn chebyshev_distance() {
        let a = TileCoord::new(10, 10);
        assert_eq!(a.chebyshev(TileCoord::new(15, 12)), 5);
        assert_eq!(a.chebyshev(TileCoord::new(10, 10)), 0);
        assert_eq!(a.chebyshev(TileCoord::new(8, 3)), 7);
    }

    #[test]
    fn dominant_axis_rounding() {
        assert_eq!(Vec2::new(3.0, 1.0).dominant_axis(), Vec2::new(1.0, 0.0));
        assert_eq!(Vec2::new(-1.0, -4.0).dominant_axis(), Vec2::new(0.0, -1.0));
        assert_eq!(Vec2::ZERO.dominant_axis(), Vec2::ZERO);
        // Horizontal wins ties.
        assert_eq!(Vec2::new(2.0, 2.0).dominant_axis(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn facing_from_vec() {
        assert_eq!(Facing::from_vec(Vec2::new(1.0, 0.2)), Facing::Right);
        assert_eq!(Facing::from_vec(Vec2::new(0.0, -1.0)), Facing::Up);
        assert_eq!(Facing::from_vec(Vec2::ZERO), Facing::Down);
    }

    #[test]
    fn rect_intersection_is_strict() {
        let a = Rect::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = a.translated(Vec2::new(20.0, 0.0));
        let overlapping = a.translated(Vec2::new(19.0, 0.0));
        assert!(!a.intersects(touching));
        assert!(a.intersects(overlapping));
    }

    #[test]
    fn rect_footprint_tiles() {
        // Hitbox centered on a tile corner touches four tiles.
        let corner = Vec2::new(TILE_SIZE, TILE_SIZE);
        let r = Rect::from_center(corner, Vec2::new(8.0, 8.0));
        let tiles = r.tiles();
        assert_eq!(tiles.len(), 4);
        assert!(tiles.contains(&TileCoord::new(0, 0)));
        assert!(tiles.contains(&TileCoord::new(1, 1)));

        // Hitbox fully inside one tile occupies exactly that tile.
        let inner = Rect::from_center(TileCoord::new(2, 2).center(), Vec2::new(8.0, 8.0));
        assert_eq!(inner.tiles(), vec![TileCoord::new(2, 2)]);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick, TickClock};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = TickClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig::new(42, 600);
        assert_eq!(cfg.end_tick(), Tick(600));
        assert!((cfg.make_clock().dt_secs - 1.0 / 60.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn weight_key_in_unit_interval() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let k = rng.weight_key(2.5);
            assert!((0.0..=1.0).contains(&k));
        }
    }

    #[test]
    fn heavier_weights_win_more_often() {
        let mut rng = AgentRng::new(7, AgentId(0));
        let mut heavy_wins = 0;
        for _ in 0..2000 {
            let heavy = rng.weight_key(4.0);
            let light = rng.weight_key(1.0);
            if heavy > light {
                heavy_wins += 1;
            }
        }
        // Expected win rate is 4/5; allow generous slack.
        assert!(heavy_wins > 1400, "heavy item won only {heavy_wins}/2000");
    }
}
