use std::collections::HashMap;
use std::sync::Arc;

use crate::formula::Formula;

/// Per-pass memo table from input nodes to their rewritten form.
///
/// Keys are node addresses, not structural values: a subtree reached twice through the
/// same `Arc` is rewritten once and both parents receive the same output handle.
/// Structurally equal but separately allocated subtrees are rewritten independently.
///
/// Addresses stay valid because a cache never outlives the borrow of the tree it
/// was filled from.
#[derive(Debug, Default)]
pub struct NodeCache {
    map: HashMap<*const Formula, Arc<Formula>>,
    hits: usize,
    misses: usize,
}

impl NodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits
    }
    /// Get the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the cached result.
    pub fn get(&mut self, node: &Formula) -> Option<Arc<Formula>> {
        match self.map.get(&(node as *const Formula)) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a result into the cache.
    pub fn insert(&mut self, node: &Formula, value: Arc<Formula>) {
        self.map.insert(node as *const Formula, value);
    }
}
