//! Behavior-tree nodes and evaluation.

use std::cmp::Ordering;

use croft_core::AgentRng;

use crate::Context;

/// Signature shared by condition and action callbacks.
///
/// The boolean result of an action reports whether it produced an effect
/// (e.g., successfully created a path), which is what lets a parent
/// `Selector` fall through to the next alternative.
pub type LeafFn<W> = Box<dyn Fn(&mut W, Context, &mut AgentRng) -> bool + Send + Sync>;

/// A named leaf callback.  The name shows up in nothing but diagnostics.
pub struct Leaf<W> {
    name: &'static str,
    run: LeafFn<W>,
}

/// One node of an immutable behavior tree over world type `W`.
///
/// Build with the constructors below, then evaluate with [`run`][Self::run].
/// Composites hold their children in evaluation order.
pub enum Node<W> {
    /// Runs children in order; `false` on the first failing child, `true`
    /// only if all succeed (empty → `true`).
    Sequence(Vec<Node<W>>),
    /// Runs children in order; `true` on the first succeeding child, `false`
    /// only if all fail (empty → `false`).
    Selector(Vec<Node<W>>),
    /// Negates its single child.
    Invert(Box<Node<W>>),
    /// Selector over a weighted shuffle of its children: each child draws the
    /// key `random() ^ (1/weight)` and children are visited in descending key
    /// order.  Used where several similarly-valid behaviors should be tried
    /// with bias rather than fixed priority.
    WeightedSelector(Vec<(f32, Node<W>)>),
    /// Leaf predicate.
    Condition(Leaf<W>),
    /// Leaf effect; result reports whether an effect was produced.
    Action(Leaf<W>),
}

impl<W> Node<W> {
    // ── Constructors ──────────────────────────────────────────────────────

    pub fn sequence(children: Vec<Node<W>>) -> Self {
        Node::Sequence(children)
    }

    pub fn selector(children: Vec<Node<W>>) -> Self {
        Node::Selector(children)
    }

    pub fn invert(child: Node<W>) -> Self {
        Node::Invert(Box::new(child))
    }

    pub fn weighted_selector(children: Vec<(f32, Node<W>)>) -> Self {
        Node::WeightedSelector(children)
    }

    pub fn condition(
        name: &'static str,
        f: impl Fn(&mut W, Context, &mut AgentRng) -> bool + Send + Sync + 'static,
    ) -> Self {
        Node::Condition(Leaf {
            name,
            run: Box::new(f),
        })
    }

    pub fn action(
        name: &'static str,
        f: impl Fn(&mut W, Context, &mut AgentRng) -> bool + Send + Sync + 'static,
    ) -> Self {
        Node::Action(Leaf {
            name,
            run: Box::new(f),
        })
    }

    /// The leaf's name; composites return `None`.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Node::Condition(leaf) | Node::Action(leaf) => Some(leaf.name),
            _ => None,
        }
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Evaluate this subtree for one agent.
    ///
    /// Synchronous: returns only when every visited leaf has returned.
    pub fn run(&self, world: &mut W, ctx: Context, rng: &mut AgentRng) -> bool {
        match self {
            Node::Sequence(children) => {
                for child in children {
                    if !child.run(world, ctx, rng) {
                        return false;
                    }
                }
                true
            }

            Node::Selector(children) => {
                for child in children {
                    if child.run(world, ctx, rng) {
                        return true;
                    }
                }
                false
            }

            Node::Invert(child) => !child.run(world, ctx, rng),

            Node::WeightedSelector(children) => {
                // Weighted sampling without replacement: draw one key per
                // child, visit in descending key order.  Index as the
                // secondary sort key keeps equal draws deterministic.
                let mut order: Vec<(f64, usize)> = children
                    .iter()
                    .enumerate()
                    .map(|(i, (weight, _))| (rng.weight_key(*weight), i))
                    .collect();
                order.sort_by(|a, b| {
                    b.0.partial_cmp(&a.0)
                        .unwrap_or(Ordering::Equal)
                        .then(a.1.cmp(&b.1))
                });
                for (_, i) in order {
                    if children[i].1.run(world, ctx, rng) {
                        return true;
                    }
                }
                false
            }

            Node::Condition(leaf) | Node::Action(leaf) => (leaf.run)(world, ctx, rng),
        }
    }
}
