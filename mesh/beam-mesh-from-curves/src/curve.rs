//! Meshing any [`CurveSpec`].

use beam_curves::CurveSpec;
use beam_mesh_types::{BeamType, GeometryName, MaterialId, Mesh};

use crate::arc::start_node_rotation;
use crate::{BeamMeshOptions, BeamMeshResult, create_beam_mesh_function, create_beam_mesh_helix};

/// Create beam elements along any supported curve.
///
/// Helices take the unrolled-and-wrapped route of
/// [`create_beam_mesh_helix`]; all other curves go straight through
/// [`create_beam_mesh_function`]. Arcs that start at an existing node take
/// over that node's triad.
///
/// # Errors
///
/// The errors of the respective curve family.
///
/// # Example
///
/// ```
/// use beam_curves::{CurveSpec, LineParams, PlanarArcParams};
/// use beam_mesh_from_curves::{BeamMeshOptions, create_beam_mesh};
/// use beam_mesh_types::{BeamMaterial, BeamTheory, BeamType, Mesh, Point3};
///
/// let mut mesh = Mesh::new();
/// let material = mesh.add_material(BeamMaterial::new(BeamTheory::Reissner, 0.1));
///
/// let curves = [
///     CurveSpec::from(LineParams::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0))),
///     CurveSpec::from(PlanarArcParams::new(Point3::new(1.0, 1.0, 0.0), 1.0, -1.5, 0.0)),
/// ];
/// for curve in &curves {
///     create_beam_mesh(&mut mesh, BeamType::ReissnerLine2, material, curve, &BeamMeshOptions::n_el(2))
///         .unwrap();
/// }
/// assert_eq!(mesh.element_count(), 4);
/// ```
pub fn create_beam_mesh(
    mesh: &mut Mesh,
    beam_type: BeamType,
    material: MaterialId,
    curve: &CurveSpec,
    options: &BeamMeshOptions,
) -> BeamMeshResult<GeometryName> {
    match curve {
        CurveSpec::Helix(helix) => create_beam_mesh_helix(mesh, beam_type, material, helix, options),
        _ => {
            let generator = curve.generator(start_node_rotation(mesh, options)?)?;
            create_beam_mesh_function(mesh, beam_type, material, &generator, options)
        }
    }
}
