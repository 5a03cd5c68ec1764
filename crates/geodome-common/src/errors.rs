use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Inconsistencies between a shell's vertex buffer, color buffer and face list.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("vertex buffer length {len} is not a multiple of {expected_multiple}")]
    BufferLength { len: usize, expected_multiple: usize },

    #[error("position buffer has {positions} values but color buffer has {colors}")]
    BufferMismatch { positions: usize, colors: usize },

    #[error("face list has {faces} faces but the buffer holds {expected}")]
    FaceCount { faces: usize, expected: usize },

    #[error("face {0} has its centroid at the origin")]
    DegenerateFace(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum GeodomeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("window error: {0}")]
    Window(String),

    #[error("renderer error: {0}")]
    Renderer(String),
}
