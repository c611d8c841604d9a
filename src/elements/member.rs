//! Member element - a two-node truss bar or frame beam

use serde::{Deserialize, Serialize};

use crate::elements::{Material, Section};

/// Internal forces in a member, in local coordinates at the start node
///
/// Truss members carry axial force only; shear and moment stay zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemberForce {
    /// Axial force
    pub axial: f64,
    /// Shear force
    pub shear: f64,
    /// Bending moment
    pub moment: f64,
}

impl MemberForce {
    /// A force state with only an axial component
    pub fn axial_only(axial: f64) -> Self {
        Self {
            axial,
            shear: 0.0,
            moment: 0.0,
        }
    }
}

/// A structural member connecting two nodes
///
/// The endpoints are indices into the owning structure's node list; the
/// member never owns its nodes. Section and material are value objects,
/// defaulted from the structure when not given explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Start node index
    pub start: usize,
    /// End node index
    pub end: usize,
    /// Cross-section property set
    pub section: Section,
    /// Material property set
    pub material: Material,
    /// Expected axial force from a structure document, for regression checks
    pub expected_axial: Option<f64>,

    /// Internal force result, written on solve
    #[serde(skip)]
    pub(crate) force: Option<MemberForce>,
}

impl Member {
    pub(crate) fn new(start: usize, end: usize, section: Section, material: Material) -> Self {
        Self {
            start,
            end,
            section,
            material,
            expected_axial: None,
            force: None,
        }
    }

    /// Get the internal force result
    ///
    /// `None` until the owning structure has been solved.
    pub fn force(&self) -> Option<&MemberForce> {
        self.force.as_ref()
    }

    /// Get the axial force result
    pub fn axial(&self) -> Option<f64> {
        self.force.map(|f| f.axial)
    }

    /// Euler buckling load for this member at the given length
    ///
    /// `P_cr = pi^2 * E * Ix / L^2`, the one design-check formula carried by
    /// the reporting layer.
    pub fn euler_buckling_load(&self, length: f64) -> f64 {
        std::f64::consts::PI.powi(2) * self.material.e * self.section.ix / length.powi(2)
    }
}
