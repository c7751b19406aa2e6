//! Wrapping a flat mesh around a cylinder.

use beam_curves::Rotation;
use beam_curves::tolerance::EPS_POS;
use nalgebra::{Point3, Vector3};
use tracing::warn;

use crate::{Mesh, MeshError, MeshResult};

impl Mesh {
    /// Wrap the mesh around a cylinder with the global Z axis as its axis.
    ///
    /// The mesh is expected in the unrolled plane `x = r`, where `y` is the
    /// arc length along the circumference and `z` the height. Every node is
    /// mapped with `φ = y / r` to `(x cos φ, x sin φ, z)` and its triad is
    /// rotated by `φ` about Z.
    ///
    /// Without an explicit `radius`, all nodes have to share the same x
    /// coordinate, which is then used as radius. With an explicit radius the
    /// nodes may deviate from the plane, which is logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::NotOnCylinderPlane`] if no radius is given and
    /// the x coordinates differ, or if the radius is not positive.
    ///
    /// # Example
    ///
    /// ```
    /// use beam_mesh_types::{Mesh, Node, Point3};
    /// use std::f64::consts::PI;
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_node(Node::from_position(Point3::new(2.0, PI, 1.0)));
    /// mesh.wrap_around_cylinder(None).unwrap();
    ///
    /// // Half the circumference of radius 2 is a quarter turn
    /// let p = mesh.nodes()[0].position;
    /// assert!((p - Point3::new(0.0, 2.0, 1.0)).norm() < 1e-12);
    /// ```
    pub fn wrap_around_cylinder(&mut self, radius: Option<f64>) -> MeshResult<()> {
        let Some(first) = self.nodes().first() else {
            return Ok(());
        };
        let x_ref = first.position.x;
        let on_plane = |x_ref: f64| {
            self.nodes()
                .iter()
                .all(|node| (node.position.x - x_ref).abs() <= EPS_POS)
        };

        let radius = match radius {
            Some(radius) => {
                if !on_plane(radius) {
                    warn!(
                        radius,
                        "nodes are not on the plane x = radius, wrapping is not isometric"
                    );
                }
                radius
            }
            None if on_plane(x_ref) => x_ref,
            None => {
                return Err(MeshError::NotOnCylinderPlane {
                    reason: "x coordinates differ and no radius is given".to_string(),
                });
            }
        };
        if !(radius > EPS_POS) {
            return Err(MeshError::NotOnCylinderPlane {
                reason: format!("radius has to be positive, got {radius}"),
            });
        }

        for node in self.nodes_mut() {
            let p = node.position;
            let phi = p.y / radius;
            node.position = Point3::new(p.x * phi.cos(), p.x * phi.sin(), p.z);
            node.rotation = Rotation::from_axis_angle(&Vector3::z(), phi) * node.rotation;
        }
        Ok(())
    }
}
