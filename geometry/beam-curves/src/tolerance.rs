//! Numeric tolerances shared by all curve generators.
//!
//! These values decide which branch is taken near degenerate
//! configurations.

/// Tolerance for comparing positions (node coincidence, planarity checks).
pub const EPS_POS: f64 = 1e-10;

/// Tolerance for comparing rotations via their quaternion coefficients.
///
/// Also used as the tie-break margin when a straight line picks its
/// secondary axis: the global Z axis is only chosen when its projection onto
/// the tangent is smaller than the projection of the global Y axis by more
/// than this value.
pub const EPS_QUATERNION: f64 = 1e-10;

/// Minimum sine of the angle between two vectors passed to
/// [`Rotation::from_basis`](crate::Rotation::from_basis).
pub const EPS_BASIS: f64 = 1e-10;

/// Maximum deviation of `MᵀM` from identity (and of `det M` from one)
/// accepted by [`Rotation::from_rotation_matrix`](crate::Rotation::from_rotation_matrix).
pub const EPS_ROTATION_MATRIX: f64 = 1e-8;

/// Absolute tolerance for detecting degenerate helix parameters
/// (zero radius, helix angle of 0° or 90°, zero turns, zero height).
pub const EPS_HELIX: f64 = 1e-8;

/// Tolerance for the first and last entries of explicit element boundary
/// positions, which must be 0 and 1.
pub const EPS_NODE_POSITIONS: f64 = 1e-12;
