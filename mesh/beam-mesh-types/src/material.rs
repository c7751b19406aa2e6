//! Beam materials.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a material in its owning [`Mesh`](crate::Mesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialId(usize);

impl MaterialId {
    /// Create an id from a raw index.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The beam theory an element formulation or material belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BeamTheory {
    /// Shear-deformable geometrically exact beams.
    Reissner,
    /// Shear-free geometrically exact beams.
    Kirchhoff,
    /// Torsion-free Euler-Bernoulli beams.
    EulerBernoulli,
}

impl fmt::Display for BeamTheory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reissner => "Reissner",
            Self::Kirchhoff => "Kirchhoff",
            Self::EulerBernoulli => "Euler-Bernoulli",
        };
        f.write_str(name)
    }
}

/// Material of a beam with a circular cross-section.
///
/// # Example
///
/// ```
/// use beam_mesh_types::{BeamMaterial, BeamTheory};
///
/// let steel = BeamMaterial::new(BeamTheory::Reissner, 0.5)
///     .with_youngs_modulus(210e3)
///     .with_density(7.85e-9);
/// assert_eq!(steel.radius, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeamMaterial {
    /// Beam theory the material parameters are meant for.
    pub theory: BeamTheory,
    /// Cross-section radius.
    pub radius: f64,
    /// Young's modulus.
    pub youngs_modulus: f64,
    /// Mass density.
    pub density: f64,
    /// Poisson's ratio.
    pub poisson_ratio: f64,
}

impl BeamMaterial {
    /// Create a material with unit Young's modulus, zero density and zero
    /// Poisson's ratio.
    #[must_use]
    pub fn new(theory: BeamTheory, radius: f64) -> Self {
        Self {
            theory,
            radius,
            youngs_modulus: 1.0,
            density: 0.0,
            poisson_ratio: 0.0,
        }
    }

    /// Set Young's modulus.
    #[must_use]
    pub fn with_youngs_modulus(mut self, youngs_modulus: f64) -> Self {
        self.youngs_modulus = youngs_modulus;
        self
    }

    /// Set the density.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Set Poisson's ratio.
    #[must_use]
    pub fn with_poisson_ratio(mut self, poisson_ratio: f64) -> Self {
        self.poisson_ratio = poisson_ratio;
        self
    }

    /// Shear modulus derived from Young's modulus and Poisson's ratio.
    #[must_use]
    pub fn shear_modulus(&self) -> f64 {
        self.youngs_modulus / (2.0 * (1.0 + self.poisson_ratio))
    }

    /// Cross-section area.
    #[must_use]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}
