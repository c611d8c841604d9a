//! Error types for the structural model

use thiserror::Error;

/// Main error type for model building and analysis
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("unrecognized fixity '{0}'; valid names: free, fixed, pin, roller, yroller, slide, wallslider")]
    InvalidFixity(String),

    #[error("no structural shape named '{0}' in the section catalog")]
    ShapeNotFound(String),

    #[error("structure is unstable: reduced stiffness matrix has a near-zero eigenvalue ({0:.3e})")]
    UnstableStructure(f64),

    #[error("invalid load input: {0}")]
    InvalidLoadInput(String),

    #[error("node {0} not found in structure")]
    NodeNotFound(usize),

    #[error("member {0} not found in structure")]
    MemberNotFound(usize),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("malformed structure document: {0}")]
    MalformedDocument(String),

    #[error("topology is frozen after the first solve; build a new structure to change it")]
    TopologyFrozen,

    #[error("structure not solved - run solve() first")]
    NotSolved,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;
