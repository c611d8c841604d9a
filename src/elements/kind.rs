//! Element formulation selector

use serde::{Deserialize, Serialize};

/// Element formulation used by every member of a structure
///
/// The kind fixes the number of degrees of freedom carried per node and the
/// stiffness kernel used when assembling the global system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Axial-only two-force members; two DOFs per node (x, y)
    Truss,
    /// Axial plus Euler-Bernoulli bending; three DOFs per node (x, y, theta)
    Frame,
}

impl ElementKind {
    /// Number of degrees of freedom carried at each node
    pub const fn dofs_per_node(self) -> usize {
        match self {
            ElementKind::Truss => 2,
            ElementKind::Frame => 3,
        }
    }

    /// Whether nodes of this kind carry a rotation DOF
    pub const fn has_rotation(self) -> bool {
        matches!(self, ElementKind::Frame)
    }

    /// Short label used in reports and log output
    pub const fn label(self) -> &'static str {
        match self {
            ElementKind::Truss => "truss",
            ElementKind::Frame => "frame",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dofs_per_node() {
        assert_eq!(ElementKind::Truss.dofs_per_node(), 2);
        assert_eq!(ElementKind::Frame.dofs_per_node(), 3);
        assert!(!ElementKind::Truss.has_rotation());
        assert!(ElementKind::Frame.has_rotation());
    }
}
