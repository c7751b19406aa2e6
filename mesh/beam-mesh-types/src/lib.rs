//! Core beam mesh types.
//!
//! This crate provides the foundational types for beam finite-element
//! meshes:
//!
//! - [`Node`] - A position with a material triad and position flags
//! - [`Element`] - A beam element referencing nodes and a material by id
//! - [`BeamType`] - Element formulation (node count, node parameters, theory)
//! - [`BeamMaterial`] - Cross-section and elastic parameters
//! - [`GeometrySet`] / [`GeometryName`] - Named, non-owning node sets
//! - [`Mesh`] - The arena that owns all of the above
//!
//! # Ownership
//!
//! Nodes, elements and materials live in a [`Mesh`] and are addressed by
//! [`NodeId`], [`ElementId`] and [`MaterialId`]. Several elements share a
//! node by holding the same id. Merging meshes shifts ids by a
//! [`MeshOffset`].
//!
//! # Example
//!
//! ```
//! use beam_mesh_types::{BeamMaterial, BeamTheory, Mesh, Node, Point3, Rotation, Vector3};
//!
//! let mut mesh = Mesh::new();
//! mesh.add_material(BeamMaterial::new(BeamTheory::Reissner, 0.05));
//! mesh.add_node(Node::from_position(Point3::new(1.0, 0.0, 0.0)));
//!
//! mesh.rotate(&Rotation::from_axis_angle(&Vector3::z(), std::f64::consts::PI), None);
//! mesh.translate(Vector3::new(1.0, 0.0, 0.0));
//!
//! assert!(mesh.nodes()[0].position.coords.norm() < 1e-12);
//! ```
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod element;
mod error;
mod geometry_set;
mod material;
mod mesh;
mod node;
mod wrap;

// Re-export core types
pub use element::{BeamType, Element, ElementId, ElementNodes};
pub use error::{MeshError, MeshResult};
pub use geometry_set::{GeometryName, GeometrySet};
pub use material::{BeamMaterial, BeamTheory, MaterialId};
pub use mesh::{Mesh, MeshOffset};
pub use node::{Node, NodeId};

pub use beam_curves::Rotation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
