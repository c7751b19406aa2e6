//! Orientation frames and parametric curve generators for beam meshes.
//!
//! A beam finite-element node carries a position and a material triad. This
//! crate provides both halves:
//!
//! - [`Rotation`] - A 3D rotation stored as a unit quaternion, with
//!   constructors from basis vectors, axis-angle and rotation matrices
//! - [`CurveGenerator`] - A position and triad function over a parameter
//!   interval, together with the arc length of that interval
//!
//! Generators are built from curve parameters:
//!
//! - [`LineParams`] - Straight lines with a constant triad
//! - [`ArcAxisParams`], [`ArcRotationParams`], [`PlanarArcParams`],
//!   [`ArcAtNodeParams`] - Circular arcs; the triad follows the arc
//! - [`HelixParams`] - Helices, with a straight-line fallback for
//!   degenerate input
//! - [`CurveSpec`] - Any of the above behind one enum
//!
//! # Example
//!
//! ```
//! use beam_curves::{ArcAxisParams, Point3, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let arc = ArcAxisParams::new(
//!     Vector3::z(),
//!     Point3::origin(),
//!     Point3::new(2.0, 0.0, 0.0),
//!     FRAC_PI_2,
//! );
//! let generator = arc.generator(None).unwrap();
//!
//! // The parameter of an arc is the rotation angle
//! assert_eq!(generator.interval(), (0.0, FRAC_PI_2));
//! assert!((generator.length() - std::f64::consts::PI).abs() < 1e-12);
//!
//! let end = generator.end();
//! assert!((end.position - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-12);
//! // The first basis vector is the tangent
//! assert!((end.rotation.tangent() + Vector3::x()).norm() < 1e-12);
//! ```
//!
//! # Triad Convention
//!
//! The columns of a rotation matrix are the basis vectors of the triad. The
//! first basis vector is the beam tangent. For arcs the second basis vector
//! points towards the center and the third along the rotation axis.
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::suboptimal_flops,
    clippy::module_name_repetitions,
    clippy::doc_markdown,
    clippy::cast_precision_loss
)]

mod arc;
mod curve;
mod error;
mod generator;
mod helix;
mod line;
mod rotation;
pub mod tolerance;

pub use arc::{ArcAtNodeParams, ArcAxisParams, ArcFunction, ArcRotationParams, PlanarArcParams};
pub use curve::CurveSpec;
pub use error::CurveError;
pub use generator::{CurveFunction, CurveGenerator, CurvePoint};
pub use helix::{HelixFunction, HelixGeometry, HelixParams, HelixShape};
pub use line::{LineFunction, LineParams, line_rotation};
pub use rotation::Rotation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, UnitQuaternion, Vector3};

/// Result type for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;
