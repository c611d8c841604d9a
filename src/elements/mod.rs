//! Structural elements module

mod fixity;
mod kind;
mod material;
mod member;
mod node;
mod section;

pub use fixity::Fixity;
pub use kind::ElementKind;
pub use material::Material;
pub use member::{Member, MemberForce};
pub use node::Node;
pub use section::Section;
