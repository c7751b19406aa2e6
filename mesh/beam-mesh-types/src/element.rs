//! Beam elements and element formulations.

use std::fmt;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BeamTheory, MaterialId, NodeId};

/// Node ids of one element, in parameter order.
pub type ElementNodes = SmallVec<[NodeId; 3]>;

/// Index of an element in its owning [`Mesh`](crate::Mesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementId(usize);

impl ElementId {
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
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Beam element formulation.
///
/// The formulation fixes the number of nodes per element and where they
/// sit in the element parameter space `xi ∈ [-1, 1]`.
///
/// # Example
///
/// ```
/// use beam_mesh_types::{BeamTheory, BeamType};
///
/// let beam = BeamType::ReissnerHermiteLine3;
/// assert_eq!(beam.node_parameters(), &[-1.0, 0.0, 1.0]);
/// assert_eq!(beam.theory(), BeamTheory::Reissner);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BeamType {
    /// Two-noded Simo-Reissner beam.
    ReissnerLine2,
    /// Three-noded Simo-Reissner beam with Hermite centerline interpolation.
    ReissnerHermiteLine3,
    /// Three-noded Kirchhoff-Love beam.
    KirchhoffLine3,
    /// Two-noded torsion-free Euler-Bernoulli beam.
    EulerBernoulliLine2,
}

const LINE2: [f64; 2] = [-1.0, 1.0];
const LINE3: [f64; 3] = [-1.0, 0.0, 1.0];

impl BeamType {
    /// Local parameter coordinates of the element nodes, in node order.
    #[must_use]
    pub fn node_parameters(self) -> &'static [f64] {
        match self {
            Self::ReissnerLine2 | Self::EulerBernoulliLine2 => &LINE2,
            Self::ReissnerHermiteLine3 | Self::KirchhoffLine3 => &LINE3,
        }
    }

    /// Number of nodes per element.
    #[must_use]
    pub fn node_count(self) -> usize {
        self.node_parameters().len()
    }

    /// The beam theory of this formulation.
    #[must_use]
    pub fn theory(self) -> BeamTheory {
        match self {
            Self::ReissnerLine2 | Self::ReissnerHermiteLine3 => BeamTheory::Reissner,
            Self::KirchhoffLine3 => BeamTheory::Kirchhoff,
            Self::EulerBernoulliLine2 => BeamTheory::EulerBernoulli,
        }
    }
}

impl fmt::Display for BeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ReissnerLine2 => "Reissner line2",
            Self::ReissnerHermiteLine3 => "Reissner Hermite line3",
            Self::KirchhoffLine3 => "Kirchhoff line3",
            Self::EulerBernoulliLine2 => "Euler-Bernoulli line2",
        };
        f.write_str(name)
    }
}

/// A beam element referencing its nodes and material by id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    beam_type: BeamType,
    material: MaterialId,
    nodes: ElementNodes,
}

impl Element {
    /// Create an element. Consistency with a mesh is checked by
    /// [`Mesh::add_element`](crate::Mesh::add_element).
    #[must_use]
    pub fn new(beam_type: BeamType, material: MaterialId, nodes: ElementNodes) -> Self {
        Self {
            beam_type,
            material,
            nodes,
        }
    }

    /// The element formulation.
    #[must_use]
    pub fn beam_type(&self) -> BeamType {
        self.beam_type
    }

    /// The material id.
    #[must_use]
    pub fn material(&self) -> MaterialId {
        self.material
    }

    /// Node ids in parameter order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// First node of the element.
    #[must_use]
    pub fn first_node(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the element.
    #[must_use]
    pub fn last_node(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub(crate) fn remap(&mut self, node_offset: usize, material: MaterialId) {
        for node in &mut self.nodes {
            *node = node.offset(node_offset);
        }
        self.material = material;
    }
}
