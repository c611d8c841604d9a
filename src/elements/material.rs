//! Material properties

use serde::{Deserialize, Serialize};

/// Material properties for structural members
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity
    pub e: f64,
    /// Yield stress
    pub fy: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(e: f64, fy: f64) -> Self {
        Self { e, fy }
    }

    /// ASTM A992 structural steel (ksi)
    pub fn a992() -> Self {
        Self { e: 29000.0, fy: 50.0 }
    }

    /// ASTM A36 structural steel (ksi)
    pub fn a36() -> Self {
        Self { e: 29000.0, fy: 36.0 }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::a992()
    }
}
