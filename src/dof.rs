//! Typed degree-of-freedom vectors
//!
//! Load and displacement vectors are ordered node-major: all DOFs of node 0,
//! then node 1, and so on, with the per-node order (x, y) for trusses and
//! (x, y, theta) for frames. [`DofVector`] carries that convention with the
//! data so callers address components by node and [`Dof`] name instead of
//! raw indices.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::elements::ElementKind;
use crate::error::{ModelError, ModelResult};

/// A single degree-of-freedom component at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dof {
    /// Translation along the global x axis
    X,
    /// Translation along the global y axis
    Y,
    /// Rotation about the out-of-plane axis (frame elements only)
    Theta,
}

impl Dof {
    fn offset(self, kind: ElementKind) -> ModelResult<usize> {
        match self {
            Dof::X => Ok(0),
            Dof::Y => Ok(1),
            Dof::Theta if kind.has_rotation() => Ok(2),
            Dof::Theta => Err(ModelError::InvalidLoadInput(
                "truss degrees of freedom have no rotation component".to_string(),
            )),
        }
    }
}

/// A dense node-major vector with one entry per structural DOF
///
/// Used both for applied load vectors and for solved displacement vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DofVector {
    kind: ElementKind,
    values: DVector<f64>,
}

impl DofVector {
    /// Create a zero vector for `n_nodes` nodes of the given element kind
    pub fn zeros(kind: ElementKind, n_nodes: usize) -> Self {
        Self {
            kind,
            values: DVector::zeros(kind.dofs_per_node() * n_nodes),
        }
    }

    /// Create a vector from a flat slice, validating its length
    pub fn from_slice(kind: ElementKind, n_nodes: usize, values: &[f64]) -> ModelResult<Self> {
        let expected = kind.dofs_per_node() * n_nodes;
        if values.len() != expected {
            return Err(ModelError::InvalidLoadInput(format!(
                "expected {} entries ({} nodes x {} DOFs) but got {}",
                expected,
                n_nodes,
                kind.dofs_per_node(),
                values.len()
            )));
        }
        Ok(Self {
            kind,
            values: DVector::from_row_slice(values),
        })
    }

    /// Element kind this vector was built for
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no entries
    pub fn is_empty(&self) -> bool {
        self.values.len() == 0
    }

    /// Number of nodes covered by this vector
    pub fn n_nodes(&self) -> usize {
        self.values.len() / self.kind.dofs_per_node()
    }

    /// Get the value of one component at a node
    pub fn get(&self, node: usize, dof: Dof) -> ModelResult<f64> {
        let offset = dof.offset(self.kind)?;
        if node >= self.n_nodes() {
            return Err(ModelError::NodeNotFound(node));
        }
        Ok(self.values[self.kind.dofs_per_node() * node + offset])
    }

    /// Set the value of one component at a node
    pub fn set(&mut self, node: usize, dof: Dof, value: f64) -> ModelResult<()> {
        let offset = dof.offset(self.kind)?;
        if node >= self.n_nodes() {
            return Err(ModelError::NodeNotFound(node));
        }
        self.values[self.kind.dofs_per_node() * node + offset] = value;
        Ok(())
    }

    /// Get all components of one node as a sub-slice
    pub fn node_values(&self, node: usize) -> ModelResult<&[f64]> {
        if node >= self.n_nodes() {
            return Err(ModelError::NodeNotFound(node));
        }
        let dpn = self.kind.dofs_per_node();
        Ok(&self.values.as_slice()[dpn * node..dpn * (node + 1)])
    }

    /// View the raw node-major data
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.values
    }
}
