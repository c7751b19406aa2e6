//! Subdivision and node reuse options.

use beam_curves::tolerance::EPS_NODE_POSITIONS;
use beam_mesh_types::NodeId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BeamMeshError, BeamMeshResult};

/// How the parameter interval of a curve is split into elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Subdivision {
    /// A fixed number of equally sized elements.
    ElementCount(usize),
    /// A target element length; the count is `round(length / l_el)`, at
    /// least one.
    ElementLength(f64),
    /// Element boundaries as normalized positions in `[0, 1]`.
    NodePositions(Vec<f64>),
}

impl Subdivision {
    /// Normalized element boundaries for a curve of the given arc length.
    ///
    /// # Errors
    ///
    /// Returns [`BeamMeshError::InvalidArgument`] for a zero element count,
    /// a non-positive element length, or node positions that do not run
    /// strictly ascending from 0 to 1.
    pub fn boundaries(&self, length: f64) -> BeamMeshResult<Vec<f64>> {
        let n_el = match self {
            Self::ElementCount(n_el) => *n_el,
            Self::ElementLength(l_el) => {
                if !(*l_el > 0.0) || !l_el.is_finite() {
                    return Err(BeamMeshError::invalid_argument(format!(
                        "element length has to be positive, got {l_el}"
                    )));
                }
                element_count(length / l_el)
            }
            Self::NodePositions(positions) => {
                check_node_positions(positions)?;
                return Ok(positions.clone());
            }
        };
        if n_el == 0 {
            return Err(BeamMeshError::invalid_argument(
                "number of elements has to be at least 1",
            ));
        }

        let too_many = || {
            BeamMeshError::invalid_argument(format!("{n_el} elements can not be allocated"))
        };
        let count = n_el.checked_add(1).ok_or_else(too_many)?;
        let mut boundaries = Vec::new();
        boundaries.try_reserve_exact(count).map_err(|_| too_many())?;
        #[allow(clippy::cast_precision_loss)]
        let boundary = |i: usize| i as f64 / n_el as f64;
        boundaries.extend((0..=n_el).map(boundary));
        Ok(boundaries)
    }
}

/// `round(ratio)` with ties to even, at least one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn element_count(ratio: f64) -> usize {
    // NaN and negative lengths end up at one element, huge ratios saturate
    ratio.round_ties_even().max(1.0) as usize
}

fn check_node_positions(positions: &[f64]) -> BeamMeshResult<()> {
    if positions.len() < 2 {
        return Err(BeamMeshError::invalid_argument(format!(
            "at least two node positions of elements are required, got {}",
            positions.len()
        )));
    }
    for (name, index, value) in [("first", 0, 0.0), ("last", positions.len() - 1, 1.0)] {
        if (positions[index] - value).abs() > EPS_NODE_POSITIONS {
            return Err(BeamMeshError::invalid_argument(format!(
                "{name} entry of node positions of elements must be {value}, got {}",
                positions[index]
            )));
        }
    }
    if !positions.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(BeamMeshError::invalid_argument(format!(
            "node positions of elements must be strictly ascending, got {positions:?}"
        )));
    }
    Ok(())
}

/// What happens at the end of a generated curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndNode {
    /// Use an existing node as the last node.
    Existing(NodeId),
    /// Close the curve onto its own first node.
    Close,
}

/// Options for discretizing a curve.
///
/// Exactly one of [`Self::with_n_el`], [`Self::with_l_el`] and
/// [`Self::with_node_positions_of_elements`] has to be set.
///
/// # Example
///
/// ```
/// use beam_mesh_from_curves::BeamMeshOptions;
///
/// let options = BeamMeshOptions::default().with_l_el(0.5).with_sets();
/// assert!(options.add_sets);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeamMeshOptions {
    /// Fixed number of elements.
    pub n_el: Option<usize>,
    /// Target element length.
    pub l_el: Option<f64>,
    /// Normalized element boundaries.
    pub node_positions_of_elements: Option<Vec<f64>>,
    /// Existing node to use as first node.
    pub start_node: Option<NodeId>,
    /// Existing node to use as last node, or close the curve.
    pub end_node: Option<EndNode>,
    /// Register the returned sets in the mesh.
    pub add_sets: bool,
    /// Twist created triads to match a reused node with the same tangent.
    pub allow_beam_rotation: bool,
}

impl Default for BeamMeshOptions {
    fn default() -> Self {
        Self {
            n_el: None,
            l_el: None,
            node_positions_of_elements: None,
            start_node: None,
            end_node: None,
            add_sets: false,
            allow_beam_rotation: true,
        }
    }
}

impl BeamMeshOptions {
    /// Options with a fixed number of elements.
    #[must_use]
    pub fn n_el(n_el: usize) -> Self {
        Self::default().with_n_el(n_el)
    }

    /// Options with a target element length.
    #[must_use]
    pub fn l_el(l_el: f64) -> Self {
        Self::default().with_l_el(l_el)
    }

    /// Set the number of elements.
    #[must_use]
    pub fn with_n_el(mut self, n_el: usize) -> Self {
        self.n_el = Some(n_el);
        self
    }

    /// Set the target element length.
    #[must_use]
    pub fn with_l_el(mut self, l_el: f64) -> Self {
        self.l_el = Some(l_el);
        self
    }

    /// Set normalized element boundaries.
    #[must_use]
    pub fn with_node_positions_of_elements(mut self, positions: Vec<f64>) -> Self {
        self.node_positions_of_elements = Some(positions);
        self
    }

    /// Start the curve at an existing node.
    #[must_use]
    pub fn with_start_node(mut self, node: NodeId) -> Self {
        self.start_node = Some(node);
        self
    }

    /// End the curve at an existing node.
    #[must_use]
    pub fn with_end_node(mut self, node: NodeId) -> Self {
        self.end_node = Some(EndNode::Existing(node));
        self
    }

    /// Close the curve onto its first node.
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.end_node = Some(EndNode::Close);
        self
    }

    /// Register the returned sets in the mesh.
    #[must_use]
    pub fn with_sets(mut self) -> Self {
        self.add_sets = true;
        self
    }

    /// Reject reused nodes whose triad differs from the curve triad.
    #[must_use]
    pub fn without_beam_rotation(mut self) -> Self {
        self.allow_beam_rotation = false;
        self
    }

    /// The single subdivision choice.
    ///
    /// # Errors
    ///
    /// Returns [`BeamMeshError::InvalidArgument`] unless exactly one
    /// subdivision option is set.
    pub fn subdivision(&self) -> BeamMeshResult<Subdivision> {
        match (self.n_el, self.l_el, &self.node_positions_of_elements) {
            (Some(n_el), None, None) => Ok(Subdivision::ElementCount(n_el)),
            (None, Some(l_el), None) => Ok(Subdivision::ElementLength(l_el)),
            (None, None, Some(positions)) => Ok(Subdivision::NodePositions(positions.clone())),
            (None, None, None) => Err(BeamMeshError::invalid_argument(
                "one of n_el, l_el or node_positions_of_elements has to be given",
            )),
            _ => Err(BeamMeshError::invalid_argument(
                "only one of n_el, l_el or node_positions_of_elements can be given",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exactly_one_subdivision() {
        assert!(BeamMeshOptions::default()
            .subdivision()
            .unwrap_err()
            .is_invalid_argument());
        assert!(BeamMeshOptions::n_el(2)
            .with_l_el(1.0)
            .subdivision()
            .unwrap_err()
            .is_invalid_argument());
        assert_eq!(
            BeamMeshOptions::n_el(2).subdivision(),
            Ok(Subdivision::ElementCount(2))
        );
    }

    #[test]
    fn test_element_length_rounds() {
        let boundaries = Subdivision::ElementLength(3.0).boundaries(10.0).unwrap();
        assert_eq!(boundaries.len(), 4);

        // Never fewer than one element
        let boundaries = Subdivision::ElementLength(100.0).boundaries(10.0).unwrap();
        assert_eq!(boundaries, vec![0.0, 1.0]);
    }

    #[test]
    fn test_element_length_ties_round_to_even() {
        // 2.5 -> 2, 3.5 -> 4, 0.5 -> 1 (at least one)
        let count = |length: f64| Subdivision::ElementLength(2.0).boundaries(length).unwrap().len() - 1;
        assert_eq!(count(5.0), 2);
        assert_eq!(count(7.0), 4);
        assert_eq!(count(1.0), 1);
    }

    #[test]
    fn test_unallocatable_counts_fail() {
        let err = Subdivision::ElementLength(1e-300).boundaries(1.0).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = Subdivision::ElementCount(usize::MAX).boundaries(1.0).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = Subdivision::ElementCount(usize::MAX / 2).boundaries(1.0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_equal_boundaries() {
        let boundaries = Subdivision::ElementCount(4).boundaries(1.0).unwrap();
        for (i, b) in boundaries.iter().enumerate() {
            assert_relative_eq!(*b, i as f64 * 0.25, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_invalid_counts_and_lengths() {
        assert!(Subdivision::ElementCount(0).boundaries(1.0).is_err());
        assert!(Subdivision::ElementLength(0.0).boundaries(1.0).is_err());
        assert!(Subdivision::ElementLength(-1.0).boundaries(1.0).is_err());
        assert!(Subdivision::ElementLength(f64::NAN).boundaries(1.0).is_err());
    }

    #[test]
    fn test_node_positions_validation() {
        let ok = Subdivision::NodePositions(vec![0.0, 0.2, 1.0]);
        assert_eq!(ok.boundaries(5.0).unwrap(), vec![0.0, 0.2, 1.0]);

        for bad in [
            vec![0.1, 1.0],
            vec![0.0, 0.9],
            vec![0.0, 0.5, 0.5, 1.0],
            vec![0.0, 0.7, 0.3, 1.0],
            vec![0.0],
        ] {
            let err = Subdivision::NodePositions(bad).boundaries(1.0).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }
}
