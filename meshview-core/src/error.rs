/// Error types for mesh loading and option files
use thiserror::Error;

/// Reasons a mesh cannot be installed in the viewer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Buffer is shorter than its header or triangle count claims
    #[error("malformed mesh: need {expected} bytes, got {actual}")]
    MalformedMesh { expected: u64, actual: u64 },

    /// Mesh decoded fine but has no triangles to frame
    #[error("mesh contains no triangles")]
    EmptyMesh,

    /// Coordinates are not finite or all vertices coincide
    #[error("mesh has no finite, non-zero extent to frame")]
    DegenerateMesh,
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid options file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("option {name} must be {expected}, got {value}")]
    OutOfRange {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },
}
