//! Cross-section properties for structural members

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::ModelResult;

/// Cross-section properties
///
/// A plain value holder injected into members. Use the parametric
/// constructors for common shapes, [`Section::from_shape`] for catalog
/// lookups, or [`Section::general`] when only A and Ix matter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area
    pub a: f64,
    /// Moment of inertia about the bending axis
    pub ix: f64,
    /// Moment of inertia about the transverse axis
    pub iy: f64,
    /// Self-weight per unit length
    pub weight: f64,
}

impl Section {
    /// Create a section with all properties given
    pub fn new(a: f64, ix: f64, iy: f64, weight: f64) -> Self {
        Self { a, ix, iy, weight }
    }

    /// Create a general section from area and moment of inertia only
    pub fn general(a: f64, ix: f64) -> Self {
        Self {
            a,
            ix,
            iy: 0.0,
            weight: 0.0,
        }
    }

    /// Create a solid rectangular section of width `b` and depth `h`
    pub fn rectangle(b: f64, h: f64) -> Self {
        Self {
            a: b * h,
            ix: b * h.powi(3) / 12.0,
            iy: h * b.powi(3) / 12.0,
            weight: 0.0,
        }
    }

    /// Create an I-beam section
    ///
    /// # Arguments
    /// * `b` - Flange width
    /// * `d` - Clear web depth between flanges
    /// * `tw` - Web thickness
    /// * `tf` - Flange thickness
    pub fn i_beam(b: f64, d: f64, tw: f64, tf: f64) -> Self {
        let a = 2.0 * b * tf + d * tw;
        let ix = b * (d + 2.0 * tf).powi(3) / 12.0 - (b - tw) * d.powi(3) / 12.0;
        let iy = 2.0 * tf * b.powi(3) / 12.0 + d * tw.powi(3) / 12.0;

        Self {
            a,
            ix,
            iy,
            weight: 0.0,
        }
    }

    /// Create a section from a named catalog shape
    ///
    /// Fails with [`ModelError::ShapeNotFound`](crate::error::ModelError::ShapeNotFound)
    /// when the name has no match.
    pub fn from_shape(name: &str) -> ModelResult<Self> {
        let shape = catalog::lookup(name)?;
        Ok(Self {
            a: shape.a,
            ix: shape.ix,
            iy: shape.iy,
            weight: shape.weight,
        })
    }

    /// Radius of gyration about the bending axis
    pub fn rx(&self) -> f64 {
        (self.ix / self.a).sqrt()
    }

    /// Radius of gyration about the transverse axis
    pub fn ry(&self) -> f64 {
        (self.iy / self.a).sqrt()
    }

    /// Polar moment of inertia
    pub fn j(&self) -> f64 {
        self.ix + self.iy
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::general(1.0, 1.0)
    }
}
