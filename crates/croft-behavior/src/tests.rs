//! Unit tests for the behavior-tree engine.

use croft_core::{AgentId, AgentRng, BehaviorMode, SpeciesId, TreeKey};

use crate::{BehaviorError, Context, Node, TreeRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Minimal test world: records which leaves ran, in order.
#[derive(Default)]
struct Trace {
    visited: Vec<&'static str>,
}

fn rng() -> AgentRng {
    AgentRng::new(42, AgentId(0))
}

fn ctx() -> Context {
    Context::new(AgentId(0))
}

/// Leaf that logs itself and returns a fixed result.
fn leaf(name: &'static str, result: bool) -> Node<Trace> {
    Node::action(name, move |w: &mut Trace, _, _| {
        w.visited.push(name);
        result
    })
}

// ── Composites ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod composites {
    use super::*;

    #[test]
    fn sequence_runs_all_on_success() {
        let tree = Node::sequence(vec![leaf("a", true), leaf("b", true), leaf("c", true)]);
        let mut w = Trace::default();
        assert!(tree.run(&mut w, ctx(), &mut rng()));
        assert_eq!(w.visited, vec!["a", "b", "c"]);
    }

    #[test]
    fn sequence_short_circuits_on_failure() {
        let tree = Node::sequence(vec![leaf("a", true), leaf("b", false), leaf("c", true)]);
        let mut w = Trace::default();
        assert!(!tree.run(&mut w, ctx(), &mut rng()));
        assert_eq!(w.visited, vec!["a", "b"], "c must not run");
    }

    #[test]
    fn selector_short_circuits_on_success() {
        let tree = Node::selector(vec![leaf("a", false), leaf("b", true), leaf("c", true)]);
        let mut w = Trace::default();
        assert!(tree.run(&mut w, ctx(), &mut rng()));
        assert_eq!(w.visited, vec!["a", "b"], "c must not run");
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let tree = Node::selector(vec![leaf("a", false), leaf("b", false)]);
        let mut w = Trace::default();
        assert!(!tree.run(&mut w, ctx(), &mut rng()));
        assert_eq!(w.visited, vec!["a", "b"]);
    }

    #[test]
    fn empty_composites() {
        let mut w = Trace::default();
        assert!(Node::sequence(vec![]).run(&mut w, ctx(), &mut rng()));
        assert!(!Node::selector(vec![]).run(&mut w, ctx(), &mut rng()));
    }

    #[test]
    fn invert_negates() {
        let mut w = Trace::default();
        assert!(!Node::invert(leaf("a", true)).run(&mut w, ctx(), &mut rng()));
        assert!(Node::invert(leaf("b", false)).run(&mut w, ctx(), &mut rng()));
    }

    #[test]
    fn nested_sequence_in_selector() {
        let tree = Node::selector(vec![
            Node::sequence(vec![leaf("gate", false), leaf("work", true)]),
            leaf("fallback", true),
        ]);
        let mut w = Trace::default();
        assert!(tree.run(&mut w, ctx(), &mut rng()));
        assert_eq!(w.visited, vec!["gate", "fallback"]);
    }

    #[test]
    fn leaf_names() {
        assert_eq!(leaf("wander", true).name(), Some("wander"));
        assert_eq!(Node::<Trace>::sequence(vec![]).name(), None);
    }
}

// ── Weighted selector ─────────────────────────────────────────────────────────

#[cfg(test)]
mod weighted {
    use super::*;

    #[test]
    fn visits_every_child_when_all_fail() {
        let tree = Node::weighted_selector(vec![
            (1.0, leaf("a", false)),
            (2.0, leaf("b", false)),
            (4.0, leaf("c", false)),
        ]);
        let mut w = Trace::default();
        assert!(!tree.run(&mut w, ctx(), &mut rng()));
        assert_eq!(w.visited.len(), 3, "without-replacement: each child once");
        for name in ["a", "b", "c"] {
            assert!(w.visited.contains(&name));
        }
    }

    #[test]
    fn stops_at_first_success_in_shuffled_order() {
        let tree = Node::weighted_selector(vec![(1.0, leaf("a", true)), (1.0, leaf("b", true))]);
        let mut w = Trace::default();
        assert!(tree.run(&mut w, ctx(), &mut rng()));
        assert_eq!(w.visited.len(), 1);
    }

    #[test]
    fn heavier_children_go_first_more_often() {
        let tree = Node::weighted_selector(vec![
            (8.0, leaf("heavy", false)),
            (1.0, leaf("light", false)),
        ]);
        let mut r = rng();
        let mut heavy_first = 0;
        for _ in 0..1000 {
            let mut w = Trace::default();
            tree.run(&mut w, ctx(), &mut r);
            if w.visited[0] == "heavy" {
                heavy_first += 1;
            }
        }
        // Expected ~8/9 ≈ 889; allow generous slack.
        assert!(heavy_first > 780, "heavy first only {heavy_first}/1000");
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;

    fn key(species: u16) -> TreeKey {
        TreeKey::new(SpeciesId(species), BehaviorMode::Default)
    }

    #[test]
    fn insert_and_require() {
        let mut reg: TreeRegistry<Trace> = TreeRegistry::new();
        reg.insert(key(0), leaf("idle", true));
        assert!(reg.require(key(0)).is_ok());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn missing_key_is_an_error() {
        let reg: TreeRegistry<Trace> = TreeRegistry::new();
        assert!(matches!(
            reg.require(key(3)),
            Err(BehaviorError::MissingTree(k)) if k == key(3)
        ));
    }

    #[test]
    fn validate_reports_first_missing_key() {
        let mut reg: TreeRegistry<Trace> = TreeRegistry::new();
        reg.insert(key(0), leaf("idle", true));
        assert!(reg.validate([key(0)]).is_ok());
        let missing = TreeKey::new(SpeciesId(0), BehaviorMode::Threatened);
        assert!(matches!(
            reg.validate([key(0), missing]),
            Err(BehaviorError::MissingTree(k)) if k == missing
        ));
    }

    #[test]
    fn agents_share_one_tree_instance() {
        let mut reg: TreeRegistry<Trace> = TreeRegistry::new();
        reg.insert(key(1), leaf("shared", true));
        let a = reg.require(key(1)).unwrap();
        let b = reg.require(key(1)).unwrap();
        assert!(std::sync::Arc::ptr_eq(&a, &b));
    }
}
