//! K Dimensional Tree algorithm is a binary search tree that extends to multiple dimensions,
//! making it an efficient datastructure for applying nearest neighbour searches and range searches
//!
//! Each depth level splits on axis `depth % dimensions`. Points strictly less than a node on
//! that axis live in its left subtree, everything else (ties included) lives in its right
//! subtree. The tree is never rebalanced so its shape follows insertion order.
//!
//! Deletion is lazy: the value of the matched node is cleared and the node keeps its place
//! so the partitioning of space stays untouched.

use crate::config::KDTreeConfig;
use crate::distance::same_point;
use crate::error::Error;
use crate::node::{KDNode, Lookup, NodeId, Slot};
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub struct KDTree<V> {
    pub(crate) nodes: Vec<KDNode<V>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) dimensions: NonZeroUsize,
    live: usize,
}

impl<V> Default for KDTree<V> {
    fn default() -> Self {
        Self::with_config(KDTreeConfig::default())
    }
}

impl<V> KDTree<V> {
    /// initialize KDTree keyed on the first `dimensions` coordinates of every point.
    /// A dimension of zero is clamped to one
    pub fn new(dimensions: usize) -> Self {
        Self::with_config(KDTreeConfig::new(dimensions))
    }

    #[tracing::instrument]
    pub fn with_config(config: KDTreeConfig) -> Self {
        if config.dimensions == 0 {
            tracing::warn!("KDTree requested with zero dimensions, clamping to 1");
        }
        Self {
            nodes: Vec::with_capacity(config.capacity),
            root: None,
            dimensions: config.clamped_dimensions(),
            live: 0,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions.get()
    }

    /// number of live values held by the tree
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// number of nodes in the tree, tombstones included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over live `(point, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &V)> {
        self.nodes
            .iter()
            .filter_map(|node| node.slot().value().map(|value| (node.point(), value)))
    }

    #[tracing::instrument(skip_all)]
    fn assert_shape(&self, point: &[f64]) -> Result<(), Error> {
        let expected = self.dimensions.get();
        if point.len() < expected {
            tracing::warn!(expected, found = point.len(), "Dimension mismatch");
            return Err(Error::DimensionMisMatch {
                expected,
                found: point.len(),
            });
        }
        Ok(())
    }

    /// insert new point into the KDTree by walking down one dimension per level until an
    /// empty child is reached. The point is copied, coordinates past `dimensions` are kept
    /// but never compared. Points shorter than `dimensions` are rejected with a dimension
    /// mismatch error
    #[tracing::instrument(skip_all)]
    pub fn insert(&mut self, point: &[f64], value: V) -> Result<(), Error> {
        self.assert_shape(point)?;
        let new_id = NodeId(self.nodes.len());
        let dimensions = self.dimensions.get();

        match self.root {
            None => self.root = Some(new_id),
            Some(mut current) => {
                let mut depth = 0;
                loop {
                    let axis = depth % dimensions;
                    let node = &mut self.nodes[current.0];
                    let child = if point[axis] < node.point[axis] {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                    match *child {
                        Some(next) => {
                            current = next;
                            depth += 1;
                        }
                        None => {
                            *child = Some(new_id);
                            tracing::trace!(depth = depth + 1, "Attached new node");
                            break;
                        }
                    }
                }
            }
        }

        self.nodes.push(KDNode::new(point, value));
        self.live += 1;
        Ok(())
    }

    /// insert a batch of points, stopping at the first point that fails
    #[tracing::instrument(skip_all)]
    pub fn insert_multi<I, P>(&mut self, entries: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<[f64]>,
    {
        for (point, value) in entries {
            self.insert(point.as_ref(), value)?;
        }
        Ok(())
    }

    /// Delete the value stored at exactly `point`, leaving its node in place. Returns the
    /// removed value, or None when no live node has these coordinates
    #[tracing::instrument(skip_all)]
    pub fn delete(&mut self, point: &[f64]) -> Result<Option<V>, Error> {
        self.assert_shape(point)?;
        let Some(found) = self.find_live(point) else {
            return Ok(None);
        };
        let removed = self.nodes[found.0].slot.take();
        if removed.is_some() {
            self.live -= 1;
            tracing::debug!(node = found.0, "Tombstoned node");
        }
        Ok(removed)
    }

    /// delete multiple entries from the KDTree, returning how many values were removed
    #[tracing::instrument(skip_all)]
    pub fn delete_multi<P: AsRef<[f64]>>(&mut self, points: &[P]) -> Result<usize, Error> {
        let mut deleted = 0;
        for point in points {
            if self.delete(point.as_ref())?.is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    /// Returns the value stored at exactly `point` if it is still live
    #[tracing::instrument(skip_all)]
    pub fn search(&self, point: &[f64]) -> Result<Option<&V>, Error> {
        self.assert_shape(point)?;
        Ok(self
            .find_live(point)
            .and_then(|found| self.nodes[found.0].slot().value()))
    }

    /// Like [`KDTree::search`] but tells a deleted coordinate apart from one that was never
    /// inserted
    #[tracing::instrument(skip_all)]
    pub fn lookup(&self, point: &[f64]) -> Result<Lookup<'_, V>, Error> {
        self.assert_shape(point)?;
        let mut lookup = Lookup::Absent;
        for id in self.descend(point) {
            let node = &self.nodes[id.0];
            if !same_point(node.point(), point) {
                continue;
            }
            match node.slot() {
                Slot::Live(value) => return Ok(Lookup::Live(value)),
                Slot::Tombstoned => lookup = Lookup::Tombstoned,
            }
        }
        Ok(lookup)
    }

    /// Equal coordinates always descend right, so every copy of `point` ever inserted lies on
    /// this one path. The first live copy wins.
    fn find_live(&self, point: &[f64]) -> Option<NodeId> {
        self.descend(point).find(|id| {
            let node = &self.nodes[id.0];
            node.slot().is_live() && same_point(node.point(), point)
        })
    }

    fn descend<'a>(&'a self, point: &'a [f64]) -> Descent<'a, V> {
        Descent {
            tree: self,
            point,
            next: self.root,
            depth: 0,
        }
    }
}

/// Nodes visited while walking from the root towards `point`, following the same rule as
/// insertion
struct Descent<'a, V> {
    tree: &'a KDTree<V>,
    point: &'a [f64],
    next: Option<NodeId>,
    depth: usize,
}

impl<V> Iterator for Descent<'_, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let axis = self.depth % self.tree.dimensions.get();
        let node = &self.tree.nodes[current.0];
        self.next = if self.point[axis] < node.point[axis] {
            node.left
        } else {
            node.right
        };
        self.depth += 1;
        Some(current)
    }
}
