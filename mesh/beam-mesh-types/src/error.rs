//! Error types for beam mesh operations.

use thiserror::Error;

use crate::{BeamTheory, BeamType, MaterialId, NodeId};

/// Result type for beam mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while building or transforming a beam mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// A node id does not belong to the mesh.
    #[error("unknown node {id}: mesh has {node_count} nodes")]
    UnknownNode {
        /// The offending id.
        id: NodeId,
        /// Number of nodes in the mesh.
        node_count: usize,
    },

    /// A material id does not belong to the mesh.
    #[error("unknown material {id}: mesh has {material_count} materials")]
    UnknownMaterial {
        /// The offending id.
        id: MaterialId,
        /// Number of materials in the mesh.
        material_count: usize,
    },

    /// The material belongs to a different beam theory than the element.
    #[error("beam type {beam_type} requires a {expected} material, got {actual}")]
    IncompatibleMaterial {
        /// The element type.
        beam_type: BeamType,
        /// Theory required by the element type.
        expected: BeamTheory,
        /// Theory of the material.
        actual: BeamTheory,
    },

    /// An element got the wrong number of nodes for its type.
    #[error("beam type {beam_type} needs {expected} nodes, got {actual}")]
    WrongNodeCount {
        /// The element type.
        beam_type: BeamType,
        /// Nodes required by the element type.
        expected: usize,
        /// Nodes provided.
        actual: usize,
    },

    /// Nodes cannot be wrapped around a cylinder.
    #[error("mesh is not on a cylinder plane: {reason}")]
    NotOnCylinderPlane {
        /// Description of the problem.
        reason: String,
    },
}

impl MeshError {
    /// Check if this error stems from malformed caller input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::UnknownNode { .. }
                | Self::UnknownMaterial { .. }
                | Self::IncompatibleMaterial { .. }
                | Self::WrongNodeCount { .. }
        )
    }

    /// Check if this error stems from an infeasible geometric configuration.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::NotOnCylinderPlane { .. })
    }
}
