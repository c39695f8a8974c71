use crate::distance::{squared_distance, within_bounds};
use crate::heap::BoundedMinHeap;
use crate::kdtree::KDTree;
use crate::node::{NodeId, Slot};
use std::cmp::Ordering;
use std::num::NonZeroUsize;

// Internal structure to order candidate nodes by their squared distance to the query
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

enum Visit {
    Node { id: NodeId, depth: usize },
    // far side of a splitting plane, only entered if the plane is closer than the worst
    // candidate once the near side has been exhausted
    Farther { id: NodeId, depth: usize, plane: f64 },
}

impl<V> KDTree<V> {
    /// Returns every live value whose point lies within `[lower, upper]` on each dimension
    /// shared by `lower` and `upper`. Values come back in pre-order traversal order, which
    /// depends on the shape of the tree rather than on the coordinates.
    #[tracing::instrument(skip_all)]
    pub fn range(&self, lower: &[f64], upper: &[f64]) -> Vec<&V> {
        let bounded = lower.len().min(upper.len());
        let dimensions = self.dimensions.get();
        let mut results = Vec::new();
        let mut stack: Vec<(NodeId, usize)> =
            self.root.map(|root| (root, 0)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            if let Slot::Live(value) = &node.slot {
                if within_bounds(&node.point, lower, upper) {
                    results.push(value);
                }
            }

            let axis = depth % dimensions;
            let split = node.point[axis];
            let (go_left, go_right) = if axis < bounded {
                (lower[axis] <= split, upper[axis] >= split)
            } else {
                (true, true)
            };
            // right first so that the left subtree is walked first
            if let Some(right) = node.right.filter(|_| go_right) {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left.filter(|_| go_left) {
                stack.push((left, depth + 1));
            }
        }
        tracing::debug!(found = results.len(), "Range query");
        results
    }

    /// Returns the live value closest to `point`
    pub fn nearest(&self, point: &[f64]) -> Option<&V> {
        self.nearest_n(point, 1).into_iter().next()
    }

    /// Returns up to `count` live values ordered from nearest to farthest
    pub fn nearest_n(&self, point: &[f64], count: usize) -> Vec<&V> {
        self.nearest_with_distances(point, count)
            .into_iter()
            .map(|(value, _)| value)
            .collect()
    }

    /// Returns up to `count` live values along with their squared euclidean distance to
    /// `point`, nearest first. Distances only cover the dimensions `point` has.
    #[tracing::instrument(skip_all, fields(count = count))]
    pub fn nearest_with_distances(&self, point: &[f64], count: usize) -> Vec<(&V, f64)> {
        let (Some(count), Some(root)) = (NonZeroUsize::new(count), self.root) else {
            return Vec::new();
        };
        let dimensions = self.dimensions.get();
        let mut candidates = BoundedMinHeap::new(count);
        let mut stack = vec![Visit::Node { id: root, depth: 0 }];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Node { id, depth } => {
                    let node = &self.nodes[id.0];
                    if node.slot.is_live() {
                        candidates.push(Candidate {
                            distance: squared_distance(point, &node.point),
                            node: id,
                        });
                    }

                    let axis = depth % dimensions;
                    let split = node.point[axis];
                    // a query without this axis sits on the plane
                    let coordinate = point.get(axis).copied().unwrap_or(split);
                    let (nearer, farther) = node.children_towards(coordinate, axis);
                    if let Some(farther) = farther {
                        stack.push(Visit::Farther {
                            id: farther,
                            depth: depth + 1,
                            plane: (coordinate - split).powi(2),
                        });
                    }
                    if let Some(nearer) = nearer {
                        stack.push(Visit::Node {
                            id: nearer,
                            depth: depth + 1,
                        });
                    }
                }
                Visit::Farther { id, depth, plane } => {
                    let worth_visiting = !candidates.is_full()
                        || candidates
                            .peek()
                            .is_some_and(|worst| plane.total_cmp(&worst.distance).is_lt());
                    if worth_visiting {
                        stack.push(Visit::Node { id, depth });
                    }
                }
            }
        }

        tracing::debug!(found = candidates.len(), "Nearest neighbour query");
        candidates
            .into_sorted_vec()
            .into_iter()
            .filter_map(|candidate| {
                self.nodes[candidate.node.0]
                    .slot
                    .value()
                    .map(|value| (value, candidate.distance))
            })
            .collect()
    }
}
