//! Discretization of a curve generator into beam elements.

use beam_curves::tolerance::{EPS_POS, EPS_QUATERNION};
use beam_curves::{CurveGenerator, CurvePoint, Rotation};
use beam_mesh_types::{
    BeamType, Element, ElementNodes, GeometryName, GeometrySet, MaterialId, Mesh, Node, NodeId,
};
use nalgebra::Vector3;
use tracing::{debug, info};

use crate::{BeamMeshError, BeamMeshOptions, BeamMeshResult, EndNode};

/// Name of the returned set with the first node of the curve.
pub const SET_START: &str = "start";
/// Name of the returned set with the last node of the curve.
pub const SET_END: &str = "end";
/// Name of the returned set with all nodes along the curve.
pub const SET_LINE: &str = "line";

/// Discretize a curve generator into beam elements and append them to
/// `mesh`.
///
/// The parameter interval of the generator is split according to the
/// subdivision in `options`. Within every element the nodes are placed at
/// the local node parameters of `beam_type`, mapped linearly onto the
/// element's parameter sub-interval. Consecutive elements share their
/// joint node.
///
/// A start node given in the options replaces the first node. Its position
/// has to match the curve start. If its triad differs from the curve triad
/// but has the same tangent, every created triad is twisted by the constant
/// relative rotation so the given node's orientation wins. The same holds
/// for an existing end node. Closing the curve connects the last element
/// to the first node.
///
/// Returns the sets [`SET_START`], [`SET_END`] and [`SET_LINE`]. All checks
/// run before the mesh is modified; on error the mesh is unchanged.
///
/// # Errors
///
/// - [`BeamMeshError::InvalidArgument`] for invalid subdivision options,
///   closing a single element, unknown node or material ids, or a material
///   of the wrong beam theory.
/// - [`BeamMeshError::InvalidGeometry`] if a reused node does not fit the
///   curve, or start and end node require different twists.
///
/// # Example
///
/// ```
/// use beam_curves::LineParams;
/// use beam_mesh_from_curves::{BeamMeshOptions, create_beam_mesh_function};
/// use beam_mesh_types::{BeamMaterial, BeamTheory, BeamType, Mesh, Point3};
///
/// let mut mesh = Mesh::new();
/// let material = mesh.add_material(BeamMaterial::new(BeamTheory::Reissner, 0.1));
/// let generator = LineParams::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0))
///     .generator()
///     .unwrap();
///
/// let sets = create_beam_mesh_function(
///     &mut mesh,
///     BeamType::ReissnerHermiteLine3,
///     material,
///     &generator,
///     &BeamMeshOptions::n_el(2),
/// )
/// .unwrap();
///
/// assert_eq!(mesh.element_count(), 2);
/// assert_eq!(mesh.node_count(), 5);
/// assert_eq!(sets.get("line").map(|set| set.len()), Some(5));
/// ```
pub fn create_beam_mesh_function(
    mesh: &mut Mesh,
    beam_type: BeamType,
    material: MaterialId,
    generator: &CurveGenerator,
    options: &BeamMeshOptions,
) -> BeamMeshResult<GeometryName> {
    let boundaries = options.subdivision()?.boundaries(generator.length())?;
    let n_el = boundaries.len() - 1;
    mesh.check_material(beam_type, material)?;

    let close = options.end_node == Some(EndNode::Close);
    if close && n_el < 2 {
        return Err(BeamMeshError::invalid_argument(
            "closing a curve onto itself needs at least two elements",
        ));
    }

    let start = match options.start_node {
        Some(id) => Some(ReusedNode::new(mesh, id)?),
        None => None,
    };
    let end = match options.end_node {
        Some(EndNode::Existing(id)) => Some(ReusedNode::new(mesh, id)?),
        Some(EndNode::Close) | None => None,
    };

    let twist_start = start
        .map(|node| relative_twist(&node.node.rotation, &generator.start().rotation, options))
        .transpose()?
        .flatten();
    let twist_end = end
        .map(|node| relative_twist(&node.node.rotation, &generator.end().rotation, options))
        .transpose()?
        .flatten();
    let twist = match (twist_start, twist_end) {
        (Some(a), Some(b)) if !a.is_close(&b) => {
            return Err(BeamMeshError::invalid_geometry(
                "the relative twists required for the start and end node do not match",
            ));
        }
        (a, b) => a.or(b),
    };

    let (a, b) = generator.interval();
    let parameter = |s: f64| a + s * (b - a);
    let evaluate = |p: f64| {
        let CurvePoint { position, rotation } = generator.evaluate(p);
        let rotation = twist.map_or(rotation, |twist| rotation * twist);
        (position, rotation)
    };

    let first_new_id = mesh.node_count();
    let mut new_nodes: Vec<Node> = Vec::new();
    let mut elements = Vec::with_capacity(n_el);
    let xi = beam_type.node_parameters();
    let last_local = xi.len() - 1;

    // The first node: either reused or created from the curve start
    let first_id = match start {
        Some(reused) => {
            let (position, rotation) = evaluate(a);
            check_node(&reused.node, position, rotation, "start node")?;
            reused.id
        }
        None => {
            let (position, rotation) = evaluate(a);
            new_nodes.push(Node::new(position, rotation));
            NodeId::new(first_new_id)
        }
    };
    let mut previous = first_id;

    for (i_el, pair) in boundaries.windows(2).enumerate() {
        let (p_a, p_b) = (parameter(pair[0]), parameter(pair[1]));
        let is_last_element = i_el + 1 == n_el;

        let mut element_nodes = ElementNodes::with_capacity(xi.len());
        element_nodes.push(previous);

        for (j, xi_j) in xi.iter().enumerate().skip(1) {
            let (position, rotation) = evaluate(p_a + (xi_j + 1.0) / 2.0 * (p_b - p_a));

            let id = if j == last_local && is_last_element && (close || end.is_some()) {
                let target = match end {
                    Some(reused) => (reused.node, reused.id, "end node"),
                    None => {
                        let first = match start {
                            Some(reused) => reused.node,
                            None => new_nodes[0],
                        };
                        (first, first_id, "first node of the closed curve")
                    }
                };
                check_node(&target.0, position, rotation, target.2)?;
                target.1
            } else {
                let mut node = Node::new(position, rotation);
                node.is_middle_node = j < last_local;
                new_nodes.push(node);
                NodeId::new(first_new_id + new_nodes.len() - 1)
            };
            element_nodes.push(id);
        }

        previous = element_nodes[last_local];
        elements.push(Element::new(beam_type, material, element_nodes));
    }
    let last_id = previous;

    let line = GeometrySet::from_nodes(
        elements
            .iter()
            .flat_map(|element: &Element| element.nodes().iter().copied()),
    );
    let created_nodes = new_nodes.len();

    mesh.append(new_nodes, elements)?;
    for id in [first_id, last_id] {
        if let Some(node) = mesh.node_mut(id) {
            node.is_end_node = true;
        }
    }

    debug!(
        beam_type = %beam_type,
        elements = n_el,
        created_nodes,
        length = generator.length(),
        twisted = twist.is_some(),
        "discretized curve"
    );

    let mut sets = GeometryName::new();
    sets.insert(SET_START, GeometrySet::from_nodes([first_id]));
    sets.insert(SET_END, GeometrySet::from_nodes([last_id]));
    sets.insert(SET_LINE, line);
    if options.add_sets {
        mesh.add_geometry_name(sets.clone());
        info!("Registered {} node sets in the mesh", sets.len());
    }
    Ok(sets)
}

/// A node of the mesh that the new curve connects to.
#[derive(Clone, Copy)]
struct ReusedNode {
    id: NodeId,
    node: Node,
}

impl ReusedNode {
    fn new(mesh: &Mesh, id: NodeId) -> BeamMeshResult<Self> {
        Ok(Self {
            id,
            node: *mesh.try_node(id)?,
        })
    }
}

/// Constant rotation that maps the curve triad onto the triad of a reused
/// node, or `None` if they already agree.
fn relative_twist(
    node_rotation: &Rotation,
    curve_rotation: &Rotation,
    options: &BeamMeshOptions,
) -> BeamMeshResult<Option<Rotation>> {
    if node_rotation.is_close(curve_rotation) {
        return Ok(None);
    }
    if !options.allow_beam_rotation {
        return Err(BeamMeshError::invalid_geometry(
            "the triad of the given node does not match the triad of the curve",
        ));
    }

    let relative_tangent = node_rotation
        .inverse()
        .apply(&curve_rotation.apply(&Vector3::x()));
    if (relative_tangent - Vector3::x()).norm() < EPS_QUATERNION {
        Ok(Some(curve_rotation.inverse() * *node_rotation))
    } else {
        Err(BeamMeshError::invalid_geometry(
            "the tangent of the given node does not match the tangent of the curve",
        ))
    }
}

fn check_node(
    node: &Node,
    position: nalgebra::Point3<f64>,
    rotation: Rotation,
    name: &str,
) -> BeamMeshResult<()> {
    let distance = (node.position - position).norm();
    if distance > EPS_POS {
        return Err(BeamMeshError::invalid_geometry(format!(
            "{name} position {:?} does not match the curve position {position:?} (distance {distance})",
            node.position
        )));
    }
    if !node.rotation.is_close(&rotation) {
        return Err(BeamMeshError::invalid_geometry(format!(
            "{name} triad does not match the curve triad"
        )));
    }
    Ok(())
}
