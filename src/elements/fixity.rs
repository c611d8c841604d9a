//! Node fixity - named support patterns expanded to per-DOF constraints

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::elements::ElementKind;
use crate::error::ModelError;

/// Named constraint pattern assigned to a node
///
/// Each fixity expands to a per-DOF free/restrained flag vector whose length
/// depends on the element kind: (x, y) for trusses, (x, y, theta) for frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fixity {
    /// All DOFs free
    Free,
    /// All DOFs restrained
    Fixed,
    /// Translations restrained, rotation free
    Pin,
    /// Moves horizontally: y restrained only
    Roller,
    /// Moves vertically: x restrained only
    YRoller,
    /// Slides along a wall: x and rotation restrained
    Slide,
}

// Free flags per fixity, true = unconstrained. Row order matches the enum.
const FRAME_TABLE: [[bool; 3]; 6] = [
    [true, true, true],    // free
    [false, false, false], // fixed
    [false, false, true],  // pin
    [true, false, true],   // roller
    [false, true, true],   // yroller
    [false, true, false],  // slide
];

impl Fixity {
    /// Expand this fixity into per-DOF free flags for the given element kind
    ///
    /// The truss table is the translation columns of the frame table.
    pub fn free_flags(self, kind: ElementKind) -> &'static [bool] {
        let row = &FRAME_TABLE[self as usize];
        &row[..kind.dofs_per_node()]
    }

    /// Canonical name of this fixity
    pub fn name(self) -> &'static str {
        match self {
            Fixity::Free => "free",
            Fixity::Fixed => "fixed",
            Fixity::Pin => "pin",
            Fixity::Roller => "roller",
            Fixity::YRoller => "yroller",
            Fixity::Slide => "slide",
        }
    }
}

impl FromStr for Fixity {
    type Err = ModelError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "free" => Ok(Fixity::Free),
            "fixed" => Ok(Fixity::Fixed),
            "pin" => Ok(Fixity::Pin),
            "roller" => Ok(Fixity::Roller),
            "yroller" => Ok(Fixity::YRoller),
            "slide" | "wallslider" => Ok(Fixity::Slide),
            _ => Err(ModelError::InvalidFixity(name.to_string())),
        }
    }
}
