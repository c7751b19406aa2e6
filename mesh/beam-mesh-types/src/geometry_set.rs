//! Named, non-owning node sets.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::NodeId;

/// An ordered collection of node ids.
///
/// The set does not own the nodes; the ids refer to nodes of a
/// [`Mesh`](crate::Mesh). Insertion order is kept and duplicates are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometrySet {
    nodes: Vec<NodeId>,
}

impl GeometrySet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a set from node ids, dropping repeated ids.
    #[must_use]
    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let mut set = Self::new();
        for node in nodes {
            set.push(node);
        }
        set
    }

    /// Append a node id unless it is already contained.
    pub fn push(&mut self, node: NodeId) {
        if !self.contains(node) {
            self.nodes.push(node);
        }
    }

    /// Whether the id is contained.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Node ids in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// First node id.
    #[must_use]
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node id.
    #[must_use]
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Shift every id by `offset`.
    #[must_use]
    pub fn offset(&self, offset: usize) -> Self {
        Self {
            nodes: self.nodes.iter().map(|node| node.offset(offset)).collect(),
        }
    }
}

/// Mapping from set names to [`GeometrySet`]s, ordered by name.
///
/// # Example
///
/// ```
/// use beam_mesh_types::{GeometryName, GeometrySet, NodeId};
///
/// let mut sets = GeometryName::new();
/// sets.insert("start", GeometrySet::from_nodes([NodeId::new(0)]));
/// sets.insert("end", GeometrySet::from_nodes([NodeId::new(4)]));
///
/// assert_eq!(sets.first_node("end"), Some(NodeId::new(4)));
/// assert_eq!(sets.names().collect::<Vec<_>>(), ["end", "start"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryName {
    sets: BTreeMap<String, GeometrySet>,
}

impl GeometryName {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sets: BTreeMap::new(),
        }
    }

    /// Insert or replace a set. Returns the replaced set.
    pub fn insert(&mut self, name: impl Into<String>, set: GeometrySet) -> Option<GeometrySet> {
        self.sets.insert(name.into(), set)
    }

    /// Look up a set by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GeometrySet> {
        self.sets.get(name)
    }

    /// First node of the named set.
    #[must_use]
    pub fn first_node(&self, name: &str) -> Option<NodeId> {
        self.get(name).and_then(GeometrySet::first)
    }

    /// Set names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Name and set pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeometrySet)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Number of sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether there are no sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Shift every node id in every set by `offset`.
    #[must_use]
    pub fn offset(&self, offset: usize) -> Self {
        Self {
            sets: self
                .sets
                .iter()
                .map(|(name, set)| (name.clone(), set.offset(offset)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_ignores_duplicates() {
        let set = GeometrySet::from_nodes([0, 1, 1, 2, 0].map(NodeId::new));
        assert_eq!(set.nodes(), &[0, 1, 2].map(NodeId::new));
        assert_eq!(set.first(), Some(NodeId::new(0)));
        assert_eq!(set.last(), Some(NodeId::new(2)));
    }

    #[test]
    fn test_offset() {
        let mut sets = GeometryName::new();
        sets.insert("line", GeometrySet::from_nodes([0, 1, 2].map(NodeId::new)));
        let shifted = sets.offset(5);
        assert_eq!(
            shifted.get("line").map(GeometrySet::nodes),
            Some(&[5, 6, 7].map(NodeId::new)[..])
        );
        // Original untouched
        assert_eq!(sets.first_node("line"), Some(NodeId::new(0)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut sets = GeometryName::new();
        assert!(sets.insert("a", GeometrySet::new()).is_none());
        assert!(sets
            .insert("a", GeometrySet::from_nodes([NodeId::new(1)]))
            .is_some());
        assert_eq!(sets.len(), 1);
        assert!(!sets.is_empty());
        assert_eq!(sets.iter().count(), 1);
    }
}
