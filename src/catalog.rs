//! Named structural-shape catalog
//!
//! A lookup table of standard rolled-shape properties backed by a serialized
//! dataset embedded in the crate and parsed once on first use.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Properties of a standard structural shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeProperties {
    /// Designation, e.g. "W21X44"
    pub name: String,
    /// Self-weight per unit length
    pub weight: f64,
    /// Cross-sectional area
    pub a: f64,
    /// Strong-axis moment of inertia
    pub ix: f64,
    /// Weak-axis moment of inertia
    pub iy: f64,
    /// Strong-axis radius of gyration
    pub rx: f64,
    /// Weak-axis radius of gyration
    pub ry: f64,
    /// Strong-axis elastic section modulus
    pub sx: f64,
    /// Weak-axis elastic section modulus
    pub sy: f64,
    /// Strong-axis plastic section modulus
    pub zx: f64,
    /// Weak-axis plastic section modulus
    pub zy: f64,
    /// Torsional constant
    pub j: f64,
}

static DATASET: &str = include_str!("catalog_data.json");
static SHAPES: OnceLock<Vec<ShapeProperties>> = OnceLock::new();

fn shapes() -> &'static [ShapeProperties] {
    SHAPES
        .get_or_init(|| serde_json::from_str(DATASET).expect("embedded shape dataset is valid JSON"))
        .as_slice()
}

/// Look up a shape by its designation
///
/// Fails with [`ModelError::ShapeNotFound`] when the name has no match.
pub fn lookup(name: &str) -> ModelResult<&'static ShapeProperties> {
    shapes()
        .iter()
        .find(|shape| shape.name == name)
        .ok_or_else(|| ModelError::ShapeNotFound(name.to_string()))
}

/// Iterate over all shape designations in the catalog
pub fn shape_names() -> impl Iterator<Item = &'static str> {
    shapes().iter().map(|shape| shape.name.as_str())
}
