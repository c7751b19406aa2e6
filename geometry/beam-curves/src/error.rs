//! Error types for curve and rotation construction.

use thiserror::Error;

/// Errors that can occur while building rotations or curve generators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// Two basis vectors do not span a plane (zero length or parallel).
    #[error("degenerate basis: {reason}")]
    DegenerateBasis {
        /// Description of the degeneracy.
        reason: String,
    },

    /// A matrix does not describe a proper rotation.
    #[error("invalid rotation matrix: {reason}")]
    InvalidRotation {
        /// Description of what's wrong with the matrix.
        reason: String,
    },

    /// The geometric configuration is degenerate or out of domain.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// Description of the geometric problem.
        reason: String,
    },

    /// Caller inputs are malformed or contradictory.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the malformed input.
        reason: String,
    },
}

impl CurveError {
    /// Create a degenerate basis error.
    #[must_use]
    pub fn degenerate_basis(reason: impl Into<String>) -> Self {
        Self::DegenerateBasis {
            reason: reason.into(),
        }
    }

    /// Create an invalid rotation error.
    #[must_use]
    pub fn invalid_rotation(reason: impl Into<String>) -> Self {
        Self::InvalidRotation {
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

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if this is a degenerate basis error.
    #[must_use]
    pub fn is_degenerate_basis(&self) -> bool {
        matches!(self, Self::DegenerateBasis { .. })
    }

    /// Check if this is an invalid rotation error.
    #[must_use]
    pub fn is_invalid_rotation(&self) -> bool {
        matches!(self, Self::InvalidRotation { .. })
    }

    /// Check if this is an invalid geometry error.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }

    /// Check if this is an invalid argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
