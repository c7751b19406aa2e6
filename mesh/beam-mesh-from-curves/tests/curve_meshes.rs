//! End-to-end tests for meshing curves into beam elements.

use approx::assert_relative_eq;
use beam_curves::{ArcAxisParams, HelixParams, PlanarArcParams, Rotation};
use beam_mesh_from_curves::{
    BeamMeshOptions, SET_END, SET_LINE, SET_START, create_beam_mesh_arc_at_node,
    create_beam_mesh_arc_segment_via_axis, create_beam_mesh_function, create_beam_mesh_helix,
    create_beam_mesh_line,
};
use beam_mesh_types::{
    BeamMaterial, BeamTheory, BeamType, GeometryName, MaterialId, Mesh, Node, NodeId, Point3,
    Vector3,
};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn reissner_mesh() -> (Mesh, MaterialId) {
    let mut mesh = Mesh::new();
    let material = mesh.add_material(BeamMaterial::new(BeamTheory::Reissner, 0.05));
    (mesh, material)
}

fn node_of(mesh: &Mesh, sets: &GeometryName, name: &str) -> Node {
    let id = sets.first_node(name).expect("set exists");
    *mesh.node(id).expect("node exists")
}

// =============================================================================
// Lines
// =============================================================================

#[test]
fn line_start_and_end_match_inputs() {
    let (mut mesh, material) = reissner_mesh();
    let start = Point3::new(-1.0, 2.0, 0.5);
    let end = Point3::new(4.0, -3.0, 2.5);
    let sets = create_beam_mesh_line(
        &mut mesh,
        BeamType::ReissnerHermiteLine3,
        material,
        start,
        end,
        &BeamMeshOptions::n_el(5),
    )
    .unwrap();

    assert_relative_eq!(node_of(&mesh, &sets, SET_START).position, start, epsilon = 1e-12);
    assert_relative_eq!(node_of(&mesh, &sets, SET_END).position, end, epsilon = 1e-12);

    // Monotone along the line
    let direction = (end - start).normalize();
    let line = sets.get(SET_LINE).unwrap();
    let distances: Vec<f64> = mesh
        .positions(line.nodes())
        .map(|p| (p - start).dot(&direction))
        .collect();
    assert_eq!(distances.len(), 11);
    assert!(distances.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn element_length_rounds_to_three_elements() {
    let (mut mesh, material) = reissner_mesh();
    create_beam_mesh_line(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        Point3::origin(),
        Point3::new(0.0, 10.0, 0.0),
        &BeamMeshOptions::l_el(3.0),
    )
    .unwrap();
    assert_eq!(mesh.element_count(), 3);
    assert_eq!(mesh.node_count(), 4);
}

#[test]
fn element_length_ties_round_to_even() {
    let (mut mesh, material) = reissner_mesh();
    create_beam_mesh_line(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        Point3::origin(),
        Point3::new(5.0, 0.0, 0.0),
        &BeamMeshOptions::l_el(2.0),
    )
    .unwrap();
    assert_eq!(mesh.element_count(), 2);
}

#[test]
fn tiny_element_length_is_rejected() {
    let (mut mesh, material) = reissner_mesh();
    let err = create_beam_mesh_line(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        &BeamMeshOptions::l_el(1e-300),
    )
    .unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(mesh.is_empty());
}

#[test]
fn conflicting_subdivisions_are_rejected() {
    let (mut mesh, material) = reissner_mesh();
    for options in [
        BeamMeshOptions::default(),
        BeamMeshOptions::n_el(2).with_l_el(1.0),
        BeamMeshOptions::l_el(1.0).with_node_positions_of_elements(vec![0.0, 1.0]),
    ] {
        let err = create_beam_mesh_line(
            &mut mesh,
            BeamType::ReissnerLine2,
            material,
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            &options,
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }
    assert!(mesh.is_empty());
}

// =============================================================================
// Arcs
// =============================================================================

#[test]
fn arc_nodes_keep_the_radius() {
    let mut mesh = Mesh::new();
    let material = mesh.add_material(BeamMaterial::new(BeamTheory::Kirchhoff, 0.05));
    let arc = ArcAxisParams::new(
        Vector3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 7.0),
        Point3::new(3.0, 1.0, 0.0),
        2.5,
    );
    create_beam_mesh_arc_segment_via_axis(
        &mut mesh,
        BeamType::KirchhoffLine3,
        material,
        &arc,
        &BeamMeshOptions::n_el(7),
    )
    .unwrap();

    for node in mesh.nodes() {
        let radial = node.position - Point3::new(1.0, 1.0, 0.0);
        assert_relative_eq!(radial.norm(), 2.0, epsilon = 1e-12);
        // Second basis vector points to the center
        assert_relative_eq!(node.rotation.basis()[1], -radial / 2.0, epsilon = 1e-12);
    }
}

#[test]
fn zero_and_negative_arc_angles_fail() {
    for angle in [0.0, -0.1] {
        let (mut mesh, material) = reissner_mesh();
        let arc = ArcAxisParams::new(Vector3::z(), Point3::origin(), Point3::new(1.0, 0.0, 0.0), angle);
        let err = create_beam_mesh_arc_segment_via_axis(
            &mut mesh,
            BeamType::ReissnerLine2,
            material,
            &arc,
            &BeamMeshOptions::n_el(3),
        )
        .unwrap_err();
        assert!(err.is_invalid_geometry(), "angle {angle}: {err}");
    }
}

#[test]
fn reused_start_node_is_shared_and_tangent_continuous() {
    let (mut mesh, material) = reissner_mesh();
    let first = create_beam_mesh_line(
        &mut mesh,
        BeamType::ReissnerHermiteLine3,
        material,
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        &BeamMeshOptions::n_el(2),
    )
    .unwrap();
    let joint = first.first_node(SET_END).unwrap();
    let nodes_before = mesh.node_count();

    let second = create_beam_mesh_arc_segment_via_axis(
        &mut mesh,
        BeamType::ReissnerHermiteLine3,
        material,
        &ArcAxisParams::new(
            Vector3::z(),
            Point3::new(1.0, 3.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            FRAC_PI_2,
        ),
        &BeamMeshOptions::n_el(3).with_start_node(joint),
    )
    .unwrap();

    assert_eq!(second.first_node(SET_START), Some(joint));
    assert_eq!(mesh.node_count(), nodes_before + 6);

    let joint_node = mesh.node(joint).unwrap();
    assert!(joint_node.is_end_node);
    let next = mesh.node(NodeId::new(nodes_before)).unwrap();
    assert!(next.is_middle_node);
    // The first interior arc node sits on the tangent side of the joint
    assert!((next.position - joint_node.position).dot(&Vector3::x()) > 0.0);
    // The first arc element starts at the joint
    let first_arc_element = &mesh.elements()[2];
    assert_eq!(first_arc_element.first_node(), Some(joint));
}

#[test]
fn closed_circle_shares_first_and_last_node() {
    let (mut mesh, material) = reissner_mesh();
    let circle = PlanarArcParams::new(Point3::origin(), 2.0, 0.0, TAU)
        .generator(None)
        .unwrap();
    let sets = create_beam_mesh_function(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        &circle,
        &BeamMeshOptions::n_el(6).closed(),
    )
    .unwrap();

    assert_eq!(mesh.node_count(), 6);
    assert_eq!(mesh.element_count(), 6);
    assert_eq!(sets.first_node(SET_START), sets.first_node(SET_END));
    let last = mesh.elements().last().unwrap();
    assert_eq!(last.last_node(), sets.first_node(SET_START));
}

#[test]
fn twisted_start_node_keeps_its_orientation() {
    let (mut mesh, material) = reissner_mesh();
    let arc = ArcAxisParams::new(Vector3::z(), Point3::origin(), Point3::new(1.0, 0.0, 0.0), PI);
    let generator = arc.generator(None).unwrap();

    let start_rotation = generator.start().rotation;
    let twist = Rotation::from_axis_angle(&Vector3::x(), 0.25);
    let start = mesh.add_node(Node::new(Point3::new(1.0, 0.0, 0.0), start_rotation * twist));

    create_beam_mesh_function(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        &generator,
        &BeamMeshOptions::n_el(4).with_start_node(start),
    )
    .unwrap();

    for (i, node) in mesh.nodes().iter().enumerate().skip(1) {
        let expected = generator.evaluate_normalized(i as f64 / 4.0).rotation * twist;
        assert!(node.rotation.is_close(&expected), "node {i}");
        assert_relative_eq!(node.rotation.tangent(), expected.tangent(), epsilon = 1e-12);
    }
}

#[test]
fn arc_at_node_continues_line() {
    let (mut mesh, material) = reissner_mesh();
    let line = create_beam_mesh_line(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        Point3::origin(),
        Point3::new(0.0, 2.0, 0.0),
        &BeamMeshOptions::n_el(2),
    )
    .unwrap();
    let joint = line.first_node(SET_END).unwrap();

    let arc = create_beam_mesh_arc_at_node(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        joint,
        Vector3::z(),
        1.0,
        PI,
        &BeamMeshOptions::n_el(8),
    )
    .unwrap();

    // Half circle turning left from +y ends one diameter to the left
    let end = node_of(&mesh, &arc, SET_END);
    assert_relative_eq!(end.position, Point3::new(-2.0, 2.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(end.rotation.tangent(), -Vector3::y(), epsilon = 1e-12);
}

#[test]
fn node_positions_place_element_boundaries() {
    let (mut mesh, material) = reissner_mesh();
    let arc = ArcAxisParams::new(Vector3::z(), Point3::origin(), Point3::new(1.0, 0.0, 0.0), PI);
    create_beam_mesh_arc_segment_via_axis(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        &arc,
        &BeamMeshOptions::default().with_node_positions_of_elements(vec![0.0, 0.5, 0.75, 1.0]),
    )
    .unwrap();

    let angles: Vec<f64> = mesh
        .nodes()
        .iter()
        .map(|node| node.position.y.atan2(node.position.x))
        .collect();
    for (angle, expected) in angles.iter().zip([0.0, FRAC_PI_2, 0.75 * PI]) {
        assert_relative_eq!(*angle, expected, epsilon = 1e-12);
    }
    assert_relative_eq!(angles[3].abs(), PI, epsilon = 1e-12);
}

#[test]
fn failed_calls_leave_mesh_unchanged() {
    let (mut mesh, material) = reissner_mesh();
    create_beam_mesh_line(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        &BeamMeshOptions::n_el(2).with_sets(),
    )
    .unwrap();
    let snapshot = mesh.clone();

    // End node does not lie at the end of the new line
    let err = create_beam_mesh_line(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        &BeamMeshOptions::n_el(4)
            .with_start_node(NodeId::new(2))
            .with_end_node(NodeId::new(0))
            .with_sets(),
    )
    .unwrap_err();
    assert!(err.is_invalid_geometry());

    assert_eq!(mesh.nodes(), snapshot.nodes());
    assert_eq!(mesh.elements(), snapshot.elements());
    assert_eq!(mesh.geometry_names(), snapshot.geometry_names());
}

// =============================================================================
// Helices
// =============================================================================

#[test]
fn helix_with_zero_turns_is_a_straight_line() {
    let (mut mesh, material) = reissner_mesh();
    let helix = HelixParams::new(Vector3::x(), Point3::new(0.0, 1.0, 0.0), Point3::new(2.0, 1.0, 1.0))
        .with_height(4.0)
        .with_turns(0.0);
    let sets = create_beam_mesh_helix(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        &helix,
        &BeamMeshOptions::n_el(4),
    )
    .unwrap();

    let end = node_of(&mesh, &sets, SET_END);
    assert_relative_eq!(end.position, Point3::new(6.0, 1.0, 1.0), epsilon = 1e-12);
    for node in mesh.nodes() {
        assert_relative_eq!(node.position.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(node.position.z, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn helix_with_zero_turns_and_no_height_fails() {
    let (mut mesh, material) = reissner_mesh();
    let helix = HelixParams::new(Vector3::x(), Point3::origin(), Point3::new(0.0, 1.0, 0.0))
        .with_helix_angle(0.4)
        .with_turns(0.0);
    let err = create_beam_mesh_helix(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        &helix,
        &BeamMeshOptions::n_el(4),
    )
    .unwrap_err();
    assert!(err.is_invalid_geometry());
}

#[test]
fn helix_wrap_matches_direct_parameterization() {
    let helix = HelixParams::new(
        Vector3::new(1.0, -2.0, 0.5),
        Point3::new(0.5, 0.0, -1.0),
        Point3::new(2.0, 1.0, 1.0),
    )
    .with_helix_angle(0.6)
    .with_turns(-1.75);

    let (mut wrapped, material) = reissner_mesh();
    create_beam_mesh_helix(
        &mut wrapped,
        BeamType::ReissnerHermiteLine3,
        material,
        &helix,
        &BeamMeshOptions::n_el(12),
    )
    .unwrap();

    let (mut direct, material) = reissner_mesh();
    create_beam_mesh_function(
        &mut direct,
        BeamType::ReissnerHermiteLine3,
        material,
        &helix.generator().unwrap(),
        &BeamMeshOptions::n_el(12),
    )
    .unwrap();

    assert_eq!(wrapped.node_count(), direct.node_count());
    assert_eq!(wrapped.elements(), direct.elements());
    for (a, b) in wrapped.nodes().iter().zip(direct.nodes()) {
        assert_relative_eq!(a.position, b.position, epsilon = 1e-10);
        assert!(a.rotation.approx_eq(&b.rotation, 1e-10));
        assert_eq!(a.is_end_node, b.is_end_node);
        assert_eq!(a.is_middle_node, b.is_middle_node);
    }
}

#[test]
fn helix_starts_at_start_point_and_rises_by_height() {
    let (mut mesh, material) = reissner_mesh();
    let axis = Vector3::new(0.0, 1.0, 1.0);
    let helix = HelixParams::new(axis, Point3::origin(), Point3::new(1.5, 0.0, 0.0))
        .with_height(3.0)
        .with_turns(2.25);
    let sets = create_beam_mesh_helix(
        &mut mesh,
        BeamType::ReissnerLine2,
        material,
        &helix,
        &BeamMeshOptions::l_el(0.5),
    )
    .unwrap();

    let start = node_of(&mesh, &sets, SET_START);
    let end = node_of(&mesh, &sets, SET_END);
    assert_relative_eq!(start.position, Point3::new(1.5, 0.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(end.position.coords.dot(&axis.normalize()), 3.0, epsilon = 1e-10);

    let unit_axis = axis.normalize();
    for node in mesh.nodes() {
        let along = node.position.coords.dot(&unit_axis);
        let radial = node.position.coords - unit_axis * along;
        assert_relative_eq!(radial.norm(), 1.5, epsilon = 1e-10);
    }
}
