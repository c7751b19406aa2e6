//! Generate beam finite-element meshes from curves.
//!
//! This crate discretizes lines, circular arcs and helices into connected
//! beam elements whose nodes carry the material triad of the curve.
//!
//! # Features
//!
//! - **Generic discretization**: [`create_beam_mesh_function`] meshes any
//!   [`CurveGenerator`](beam_curves::CurveGenerator)
//! - **Curve families**: one function per line, arc and helix variant
//! - **Node reuse**: start at an existing node, end at one, or close the
//!   curve onto itself; triads are twisted to match reused nodes
//! - **Atomic**: a failed call leaves the mesh untouched
//!
//! # Quick Start
//!
//! ```
//! use beam_curves::PlanarArcParams;
//! use beam_mesh_from_curves::{
//!     BeamMeshOptions, create_beam_mesh_arc_segment_2d, create_beam_mesh_line,
//! };
//! use beam_mesh_types::{BeamMaterial, BeamTheory, BeamType, Mesh, Point3};
//!
//! let mut mesh = Mesh::new();
//! let material = mesh.add_material(BeamMaterial::new(BeamTheory::Reissner, 0.1));
//!
//! // A straight beam along x
//! let line = create_beam_mesh_line(
//!     &mut mesh,
//!     BeamType::ReissnerHermiteLine3,
//!     material,
//!     Point3::new(-1.0, -1.0, 0.0),
//!     Point3::new(0.0, -1.0, 0.0),
//!     &BeamMeshOptions::n_el(2),
//! )
//! .unwrap();
//!
//! // Continued by a quarter circle sharing the end node
//! let arc = create_beam_mesh_arc_segment_2d(
//!     &mut mesh,
//!     BeamType::ReissnerHermiteLine3,
//!     material,
//!     &PlanarArcParams::new(Point3::origin(), 1.0, -std::f64::consts::FRAC_PI_2, 0.0),
//!     &BeamMeshOptions::n_el(4).with_start_node(line.first_node("end").unwrap()),
//! )
//! .unwrap();
//!
//! assert_eq!(arc.first_node("start"), line.first_node("end"));
//! assert_eq!(mesh.element_count(), 6);
//! assert_eq!(mesh.node_count(), 13);
//! ```
//!
//! # Returned Sets
//!
//! Every function returns a [`GeometryName`](beam_mesh_types::GeometryName)
//! with the sets `"start"`, `"end"` and `"line"`.

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod arc;
mod curve;
mod discretize;
mod error;
mod helix;
mod line;
mod options;

pub use arc::{
    create_beam_mesh_arc_at_node, create_beam_mesh_arc_segment_2d,
    create_beam_mesh_arc_segment_via_axis, create_beam_mesh_arc_segment_via_rotation,
};
pub use curve::create_beam_mesh;
pub use discretize::{SET_END, SET_LINE, SET_START, create_beam_mesh_function};
pub use error::{BeamMeshError, BeamMeshResult};
pub use helix::create_beam_mesh_helix;
pub use line::{create_beam_mesh_line, create_beam_mesh_line_at_node};
pub use options::{BeamMeshOptions, EndNode, Subdivision};
