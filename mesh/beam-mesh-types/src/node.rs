//! Beam nodes.

use std::fmt;

use beam_curves::Rotation;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a node in its owning [`Mesh`](crate::Mesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Create an id from a raw index.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Shift the id by `offset`.
    #[inline]
    #[must_use]
    pub const fn offset(self, offset: usize) -> Self {
        Self(self.0 + offset)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A beam node: position, material triad and position flags.
///
/// Two nodes are the same only if they have the same [`NodeId`]; nodes with
/// equal coordinates are still distinct.
///
/// # Example
///
/// ```
/// use beam_mesh_types::{Node, Point3};
///
/// let node = Node::from_position(Point3::new(1.0, 2.0, 3.0)).with_end_node();
/// assert!(node.is_end_node);
/// assert!(!node.is_middle_node);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// Node position.
    pub position: Point3<f64>,
    /// Material triad at the node.
    pub rotation: Rotation,
    /// First or last node of a generated curve.
    pub is_end_node: bool,
    /// Interior node of a higher-order element.
    pub is_middle_node: bool,
}

impl Node {
    /// Create a node without flags.
    #[must_use]
    pub fn new(position: Point3<f64>, rotation: Rotation) -> Self {
        Self {
            position,
            rotation,
            is_end_node: false,
            is_middle_node: false,
        }
    }

    /// Create a node with the identity triad.
    #[must_use]
    pub fn from_position(position: Point3<f64>) -> Self {
        Self::new(position, Rotation::identity())
    }

    /// Mark the node as curve end node.
    #[must_use]
    pub fn with_end_node(mut self) -> Self {
        self.is_end_node = true;
        self
    }

    /// Mark the node as element middle node.
    #[must_use]
    pub fn with_middle_node(mut self) -> Self {
        self.is_middle_node = true;
        self
    }

    /// Rotate position and triad about `origin`.
    pub fn rotate(&mut self, rotation: &Rotation, origin: &Point3<f64>) {
        self.position = origin + rotation.apply(&(self.position - origin));
        self.rotation = *rotation * self.rotation;
    }

    /// Translate the position.
    pub fn translate(&mut self, offset: &Vector3<f64>) {
        self.position += offset;
    }
}
