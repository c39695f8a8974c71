/// NodeId is the position of a node inside the tree's arena. Nodes are never removed, so an
/// id stays valid for the lifetime of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// What a node currently holds. A node starts `Live` and can only move to `Tombstoned`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<V> {
    Live(V),
    Tombstoned,
}

impl<V> Slot<V> {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Live(value) => Some(value),
            Self::Tombstoned => None,
        }
    }

    /// Clear the slot, handing back the value it held
    pub fn take(&mut self) -> Option<V> {
        match std::mem::replace(self, Self::Tombstoned) {
            Self::Live(value) => Some(value),
            Self::Tombstoned => None,
        }
    }
}

/// Result of an exact-match lookup, distinguishing a coordinate that was never stored from
/// one whose value has been deleted.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, V> {
    Absent,
    Tombstoned,
    Live(&'a V),
}

impl<'a, V> Lookup<'a, V> {
    pub fn value(self) -> Option<&'a V> {
        match self {
            Self::Live(value) => Some(value),
            Self::Absent | Self::Tombstoned => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KDNode<V> {
    pub(crate) point: Box<[f64]>,
    pub(crate) slot: Slot<V>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<V> KDNode<V> {
    pub fn new(point: &[f64], value: V) -> Self {
        Self {
            point: point.into(),
            slot: Slot::Live(value),
            left: None,
            right: None,
        }
    }

    pub fn point(&self) -> &[f64] {
        &self.point
    }

    pub fn slot(&self) -> &Slot<V> {
        &self.slot
    }

    /// The child on the side of the splitting plane that `coordinate` falls on, followed by
    /// the other child. Ties go right.
    pub(crate) fn children_towards(
        &self,
        coordinate: f64,
        axis: usize,
    ) -> (Option<NodeId>, Option<NodeId>) {
        if coordinate < self.point[axis] {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        }
    }
}
