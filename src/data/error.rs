use thiserror::Error;

/// Errors raised while loading the scene's input files
#[derive(Debug, Error)]
pub enum LoadError {
    /// A control point line did not hold exactly three numbers
    #[error("control points, line {line}: expected `x y z`, found {found:?}")]
    ControlPoint { line: usize, found: String },
    /// A `v` or `f` line of the mesh could not be read
    #[error("mesh, line {line}: {message}")]
    Mesh { line: usize, message: String },
    /// A face references a vertex that does not exist
    #[error("mesh, line {line}: vertex index {index} out of range (1..={vertex_count})")]
    FaceIndex {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
    #[error("mesh has no vertices")]
    EmptyMesh,
    #[error("a cubic B-spline needs at least 4 control points, found {0}")]
    TooFewControlPoints(usize),
    #[error("scene config: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("scene config: {0}")]
    InvalidConfig(String),
}

pub type LoadResult<T> = Result<T, LoadError>;
