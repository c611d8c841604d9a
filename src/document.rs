//! Structure-definition documents
//!
//! A document is a mapping with `XSection`, `Material`, `Nodes`, `Members`
//! and optional `Loads` keys describing a complete structure plus the
//! expected member forces used for regression comparison. Nodes are an
//! ordered list of single-name entries; members are keyed
//! `"<startName>,<endName>"`. Malformed documents fail at load time, never
//! during a later solve.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::dof::{Dof, DofVector};
use crate::elements::{ElementKind, Material, Section};
use crate::error::{ModelError, ModelResult};
use crate::model::Structure;

fn default_unity() -> f64 {
    1.0
}

/// Cross-section constructor arguments
#[derive(Debug, Clone, Deserialize)]
struct SectionEntry {
    #[serde(rename = "A", default = "default_unity")]
    a: f64,
    #[serde(rename = "Ix", default = "default_unity")]
    ix: f64,
}

/// Material constructor arguments
#[derive(Debug, Clone, Deserialize)]
struct MaterialEntry {
    #[serde(rename = "E")]
    e: f64,
    #[serde(default)]
    fy: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct NodeEntry {
    x: f64,
    y: f64,
    fixity: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct MemberEntry {
    axial: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct LoadEntry {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    theta: f64,
}

/// A parsed structure-definition document
#[derive(Debug, Clone, Deserialize)]
pub struct StructureDocument {
    #[serde(rename = "XSection")]
    xsection: SectionEntry,
    #[serde(rename = "Material")]
    material: MaterialEntry,
    #[serde(rename = "Nodes")]
    nodes: Vec<HashMap<String, NodeEntry>>,
    #[serde(rename = "Members")]
    members: Vec<HashMap<String, MemberEntry>>,
    #[serde(rename = "Loads", default)]
    loads: Vec<HashMap<String, LoadEntry>>,
}

fn single_entry<'a, T>(
    entry: &'a HashMap<String, T>,
    what: &str,
) -> ModelResult<(&'a str, &'a T)> {
    let mut iter = entry.iter();
    match (iter.next(), iter.next()) {
        (Some((name, value)), None) => Ok((name.as_str(), value)),
        _ => Err(ModelError::MalformedDocument(format!(
            "each {what} entry must contain exactly one name"
        ))),
    }
}

impl StructureDocument {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a document from a file
    pub fn from_file(path: impl AsRef<Path>) -> ModelResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    fn node_indices(&self) -> ModelResult<HashMap<String, usize>> {
        let mut indices = HashMap::new();
        for (i, entry) in self.nodes.iter().enumerate() {
            let (name, _) = single_entry(entry, "node")?;
            if indices.insert(name.to_string(), i).is_some() {
                return Err(ModelError::MalformedDocument(format!(
                    "duplicate node name '{name}'"
                )));
            }
        }
        Ok(indices)
    }

    /// Build a structure of the given element kind from this document
    pub fn build(&self, kind: ElementKind) -> ModelResult<Structure> {
        let section = Section::general(self.xsection.a, self.xsection.ix);
        let material = Material::new(self.material.e, self.material.fy);
        let mut structure = Structure::new(kind, section, material);

        let indices = self.node_indices()?;
        for entry in &self.nodes {
            let (_, spec) = single_entry(entry, "node")?;
            let fixity = spec.fixity.as_deref().unwrap_or("free");
            structure.add_node(spec.x, spec.y, fixity)?;
        }

        for entry in &self.members {
            let (key, spec) = single_entry(entry, "member")?;
            let (start_name, end_name) = key.split_once(',').ok_or_else(|| {
                ModelError::MalformedDocument(format!(
                    "member key '{key}' must be '<startName>,<endName>'"
                ))
            })?;
            let resolve = |name: &str| {
                indices.get(name.trim()).copied().ok_or_else(|| {
                    ModelError::MalformedDocument(format!(
                        "member '{key}' references unknown node '{name}'"
                    ))
                })
            };
            let index = structure.add_member(resolve(start_name)?, resolve(end_name)?)?;
            if let Some(member) = structure.member_mut(index) {
                member.expected_axial = spec.axial;
            }
        }

        Ok(structure)
    }

    /// Assemble the document's load vector for the given element kind
    pub fn load_vector(&self, kind: ElementKind) -> ModelResult<DofVector> {
        let indices = self.node_indices()?;
        let mut loads = DofVector::zeros(kind, self.nodes.len());

        for entry in &self.loads {
            let (name, spec) = single_entry(entry, "load")?;
            let index = indices.get(name).copied().ok_or_else(|| {
                ModelError::MalformedDocument(format!("load references unknown node '{name}'"))
            })?;
            loads.set(index, Dof::X, spec.x)?;
            loads.set(index, Dof::Y, spec.y)?;
            if kind.has_rotation() {
                loads.set(index, Dof::Theta, spec.theta)?;
            } else if spec.theta != 0.0 {
                return Err(ModelError::MalformedDocument(format!(
                    "load on node '{name}' applies a moment to a truss structure"
                )));
            }
        }

        Ok(loads)
    }

    /// Expected member axial forces, in member order
    pub fn expected_axials(&self) -> ModelResult<Vec<Option<f64>>> {
        self.members
            .iter()
            .map(|entry| single_entry(entry, "member").map(|(_, spec)| spec.axial))
            .collect()
    }
}
