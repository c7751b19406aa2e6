//! Error types for beam mesh creation.

use beam_curves::CurveError;
use beam_mesh_types::MeshError;
use thiserror::Error;

/// Result type for beam mesh creation.
pub type BeamMeshResult<T> = Result<T, BeamMeshError>;

/// Errors that can occur while discretizing a curve into beam elements.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BeamMeshError {
    /// Options or node arguments are malformed or contradictory.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the malformed input.
        reason: String,
    },

    /// A given node does not fit the generated curve.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// Description of the mismatch.
        reason: String,
    },

    /// Building the curve failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// The mesh rejected an operation.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl BeamMeshError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create an invalid geometry error.
    #[must_use]
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Check if the caller passed malformed input, including unknown ids and
    /// incompatible materials.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } => true,
            Self::Curve(err) => err.is_invalid_argument(),
            Self::Mesh(err) => err.is_invalid_argument(),
            Self::InvalidGeometry { .. } => false,
        }
    }

    /// Check if the geometric configuration is infeasible.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        match self {
            Self::InvalidGeometry { .. } => true,
            Self::Curve(err) => err.is_invalid_geometry(),
            Self::Mesh(err) => err.is_invalid_geometry(),
            Self::InvalidArgument { .. } => false,
        }
    }

    /// Check if two basis vectors failed to span a triad.
    #[must_use]
    pub fn is_degenerate_basis(&self) -> bool {
        matches!(self, Self::Curve(err) if err.is_degenerate_basis())
    }

    /// Check if a matrix was not a proper rotation.
    #[must_use]
    pub fn is_invalid_rotation(&self) -> bool {
        matches!(self, Self::Curve(err) if err.is_invalid_rotation())
    }
}
