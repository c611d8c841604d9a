//! frame2d - A native Rust direct stiffness solver for 2D structures
//!
//! This library analyzes planar truss and frame structures with the direct
//! stiffness method: build a topology of nodes and members, apply nodal
//! loads, and recover nodal displacements and member internal forces.
//! Supported element formulations:
//! - Truss (axial-only two-force members, 2 DOFs per node)
//! - Frame (axial plus Euler-Bernoulli bending, 3 DOFs per node)
//!
//! ## Example
//! ```rust
//! use frame2d::prelude::*;
//!
//! let mut truss = Structure::truss(Section::general(1.0, 1.0), Material::new(30e6, 50.0));
//!
//! // Add nodes: a pin, a loaded apex, a roller
//! truss.add_node(0.0, 0.0, "pin").unwrap();
//! truss.add_node(1.0, 1.0, "free").unwrap();
//! truss.add_node(2.0, 0.0, "roller").unwrap();
//!
//! // Add members
//! truss.add_member(0, 1).unwrap();
//! truss.add_member(1, 2).unwrap();
//! truss.add_member(2, 0).unwrap();
//!
//! // Solve for a load at the apex
//! truss.solve_slice(&[0.0, 0.0, 100.0, 100.0, 0.0, 0.0]).unwrap();
//!
//! // Member 1-2 carries no force in this configuration
//! assert!(truss.member_axial(1).unwrap().abs() < 1e-6);
//! ```

pub mod catalog;
pub mod document;
pub mod dof;
pub mod elements;
pub mod error;
pub mod math;
pub mod model;
pub mod report;

// Re-export common types
pub mod prelude {
    pub use crate::catalog::ShapeProperties;
    pub use crate::document::StructureDocument;
    pub use crate::dof::{Dof, DofVector};
    pub use crate::elements::{
        ElementKind, Fixity, Material, Member, MemberForce, Node, Section,
    };
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::model::Structure;
}
