//! The beam mesh arena.

use beam_curves::Rotation;
use nalgebra::{Point3, Vector3};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    BeamMaterial, BeamType, Element, ElementId, GeometryName, MaterialId, MeshError, MeshResult,
    Node, NodeId,
};

/// Id shifts applied when one mesh is merged into another.
///
/// Sets built against the merged mesh can be re-targeted with
/// [`MeshOffset::geometry_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshOffset {
    /// Added to every node id of the merged mesh.
    pub nodes: usize,
    /// Added to every element id of the merged mesh.
    pub elements: usize,
}

impl MeshOffset {
    /// Map a node id of the merged mesh to the receiving mesh.
    #[must_use]
    pub fn node(&self, id: NodeId) -> NodeId {
        id.offset(self.nodes)
    }

    /// Map an element id of the merged mesh to the receiving mesh.
    #[must_use]
    pub fn element(&self, id: ElementId) -> ElementId {
        ElementId::new(id.index() + self.elements)
    }

    /// Map all sets of a geometry name to the receiving mesh.
    #[must_use]
    pub fn geometry_name(&self, sets: &GeometryName) -> GeometryName {
        sets.offset(self.nodes)
    }
}

/// Beam mesh: owns nodes, elements, materials and registered sets.
///
/// Nodes, elements and materials are addressed by index ids that stay
/// valid for the lifetime of the mesh. Elements only ever reference nodes
/// and materials of their own mesh.
///
/// # Example
///
/// ```
/// use beam_mesh_types::{
///     BeamMaterial, BeamTheory, BeamType, Element, Mesh, Node, Point3,
/// };
/// use smallvec::smallvec;
///
/// let mut mesh = Mesh::new();
/// let material = mesh.add_material(BeamMaterial::new(BeamTheory::Reissner, 0.1));
/// let a = mesh.add_node(Node::from_position(Point3::origin()));
/// let b = mesh.add_node(Node::from_position(Point3::new(1.0, 0.0, 0.0)));
///
/// mesh.add_element(Element::new(BeamType::ReissnerLine2, material, smallvec![a, b]))
///     .unwrap();
///
/// assert_eq!(mesh.node_count(), 2);
/// assert_eq!(mesh.element_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    nodes: Vec<Node>,
    elements: Vec<Element>,
    materials: Vec<BeamMaterial>,
    geometry_names: Vec<GeometryName>,
}

impl Mesh {
    /// Create an empty mesh.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            elements: Vec::new(),
            materials: Vec::new(),
            geometry_names: Vec::new(),
        }
    }

    /// Number of nodes.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of distinct materials.
    #[inline]
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Whether the mesh has neither nodes nor elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.elements.is_empty()
    }

    /// All nodes in id order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All elements in id order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All materials in id order.
    #[must_use]
    pub fn materials(&self) -> &[BeamMaterial] {
        &self.materials
    }

    /// Registered geometry-name groups in registration order.
    #[must_use]
    pub fn geometry_names(&self) -> &[GeometryName] {
        &self.geometry_names
    }

    /// Look up a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Look up a node for modification.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Look up a node, failing for foreign ids.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownNode`] if the id is out of range.
    pub fn try_node(&self, id: NodeId) -> MeshResult<&Node> {
        self.node(id).ok_or(MeshError::UnknownNode {
            id,
            node_count: self.nodes.len(),
        })
    }

    /// Look up an element.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Look up a material.
    #[must_use]
    pub fn material(&self, id: MaterialId) -> Option<&BeamMaterial> {
        self.materials.get(id.index())
    }

    /// Positions of the given nodes, skipping unknown ids.
    pub fn positions<'a>(
        &'a self,
        ids: &'a [NodeId],
    ) -> impl Iterator<Item = Point3<f64>> + 'a {
        ids.iter().filter_map(|&id| self.node(id).map(|node| node.position))
    }

    /// Append a node and return its id.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId::new(self.nodes.len() - 1)
    }

    /// Register a material. An equal material that is already registered
    /// is reused.
    pub fn add_material(&mut self, material: BeamMaterial) -> MaterialId {
        if let Some(index) = self.materials.iter().position(|m| *m == material) {
            return MaterialId::new(index);
        }
        self.materials.push(material);
        MaterialId::new(self.materials.len() - 1)
    }

    /// Check that elements of `beam_type` may use `material`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownMaterial`] for a foreign id and
    /// [`MeshError::IncompatibleMaterial`] for a material of another beam
    /// theory.
    pub fn check_material(&self, beam_type: BeamType, material: MaterialId) -> MeshResult<()> {
        let registered = self.material(material).ok_or(MeshError::UnknownMaterial {
            id: material,
            material_count: self.materials.len(),
        })?;
        if registered.theory != beam_type.theory() {
            return Err(MeshError::IncompatibleMaterial {
                beam_type,
                expected: beam_type.theory(),
                actual: registered.theory,
            });
        }
        Ok(())
    }

    /// Append an element after checking its node ids and material.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownNode`], [`MeshError::UnknownMaterial`],
    /// [`MeshError::IncompatibleMaterial`] or [`MeshError::WrongNodeCount`].
    /// The mesh is unchanged on error.
    pub fn add_element(&mut self, element: Element) -> MeshResult<ElementId> {
        self.check_element(&element, self.nodes.len())?;
        self.elements.push(element);
        Ok(ElementId::new(self.elements.len() - 1))
    }

    /// Append nodes and elements as one unit.
    ///
    /// Elements may reference existing nodes as well as the appended ones,
    /// whose ids continue from [`Self::node_count`] in order. Everything is
    /// checked before the mesh is modified. Returns the id of the first
    /// appended node and the first appended element.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_element`]; the mesh is unchanged on error.
    pub fn append(
        &mut self,
        nodes: Vec<Node>,
        elements: Vec<Element>,
    ) -> MeshResult<(NodeId, ElementId)> {
        let node_count = self.nodes.len() + nodes.len();
        for element in &elements {
            self.check_element(element, node_count)?;
        }

        let first = (
            NodeId::new(self.nodes.len()),
            ElementId::new(self.elements.len()),
        );
        self.nodes.extend(nodes);
        self.elements.extend(elements);
        Ok(first)
    }

    fn check_element(&self, element: &Element, node_count: usize) -> MeshResult<()> {
        let beam_type = element.beam_type();
        if element.nodes().len() != beam_type.node_count() {
            return Err(MeshError::WrongNodeCount {
                beam_type,
                expected: beam_type.node_count(),
                actual: element.nodes().len(),
            });
        }
        if let Some(&id) = element.nodes().iter().find(|id| id.index() >= node_count) {
            return Err(MeshError::UnknownNode { id, node_count });
        }
        self.check_material(beam_type, element.material())
    }

    /// Register a geometry-name group with the mesh.
    ///
    /// Names are not required to be unique across groups.
    pub fn add_geometry_name(&mut self, sets: GeometryName) {
        self.geometry_names.push(sets);
    }

    /// Merge another mesh into this one.
    ///
    /// Nodes and elements are appended in order, shifted by the returned
    /// offset. Materials equal to already registered ones are reused.
    /// Registered geometry names are re-targeted but not renamed.
    pub fn add_mesh(&mut self, other: Self) -> MeshOffset {
        let offset = MeshOffset {
            nodes: self.nodes.len(),
            elements: self.elements.len(),
        };

        let material_map: Vec<MaterialId> = other
            .materials
            .into_iter()
            .map(|material| self.add_material(material))
            .collect();

        self.nodes.extend(other.nodes);
        for mut element in other.elements {
            let material = material_map
                .get(element.material().index())
                .copied()
                .unwrap_or_else(|| element.material());
            element.remap(offset.nodes, material);
            self.elements.push(element);
        }
        self.geometry_names.extend(
            other
                .geometry_names
                .iter()
                .map(|sets| offset.geometry_name(sets)),
        );

        debug!(
            node_offset = offset.nodes,
            element_offset = offset.elements,
            "merged mesh"
        );
        offset
    }

    /// Rotate all node positions and triads.
    ///
    /// Positions rotate about `origin`, or the global origin if `None`.
    pub fn rotate(&mut self, rotation: &Rotation, origin: Option<Point3<f64>>) {
        let origin = origin.unwrap_or_else(Point3::origin);
        for node in &mut self.nodes {
            node.rotate(rotation, &origin);
        }
    }

    /// Translate all node positions.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for node in &mut self.nodes {
            node.translate(&offset);
        }
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }
}
