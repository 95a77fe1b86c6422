//! The behavior-tree registry.

use std::collections::HashMap;
use std::sync::Arc;

use croft_core::TreeKey;

use crate::tree::Node;
use crate::{BehaviorError, BehaviorResult};

/// Maps a `(species, mode)` key to one constructed, immutable tree instance.
///
/// Populated once at startup; every agent of a species evaluates the same
/// `Arc`'d tree.  A key that does not resolve is a programming error — use
/// [`validate`][Self::validate] to fail fast before any agent runs.
pub struct TreeRegistry<W> {
    map: HashMap<TreeKey, Arc<Node<W>>>,
}

impl<W> TreeRegistry<W> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register `tree` under `key`, replacing any previous registration.
    pub fn insert(&mut self, key: TreeKey, tree: Node<W>) {
        self.map.insert(key, Arc::new(tree));
    }

    pub fn contains(&self, key: TreeKey) -> bool {
        self.map.contains_key(&key)
    }

    /// The tree for `key`, if registered.
    pub fn get(&self, key: TreeKey) -> Option<Arc<Node<W>>> {
        self.map.get(&key).cloned()
    }

    /// The tree for `key`, or `BehaviorError::MissingTree`.
    pub fn require(&self, key: TreeKey) -> BehaviorResult<Arc<Node<W>>> {
        self.get(key).ok_or(BehaviorError::MissingTree(key))
    }

    /// Check that every key in `keys` resolves.  Returns the first missing
    /// key as an error; call at startup, after all trees are built.
    pub fn validate(&self, keys: impl IntoIterator<Item = TreeKey>) -> BehaviorResult<()> {
        for key in keys {
            if !self.contains(key) {
                return Err(BehaviorError::MissingTree(key));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<W> Default for TreeRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}
