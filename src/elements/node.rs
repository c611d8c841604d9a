//! Node element - a point in the structure plane

use serde::{Deserialize, Serialize};

use crate::elements::Fixity;

/// A 2D node in the structural model
///
/// Nodes are created through [`Structure::add_node`](crate::model::Structure::add_node),
/// which assigns the dense insertion-order index. The displacement field is a
/// derived result written by the solver, one value per DOF of the structure's
/// element kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Insertion-order index, dense in 0..n_nodes
    pub index: usize,
    /// Support pattern at this node
    pub fixity: Fixity,

    /// Displacement result, written on solve
    #[serde(skip)]
    pub(crate) displacement: Option<Vec<f64>>,
}

impl Node {
    pub(crate) fn new(x: f64, y: f64, index: usize, fixity: Fixity) -> Self {
        Self {
            x,
            y,
            index,
            fixity,
            displacement: None,
        }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Get the solved displacement, one entry per DOF
    ///
    /// `None` until the owning structure has been solved.
    pub fn displacement(&self) -> Option<&[f64]> {
        self.displacement.as_deref()
    }
}
