use thiserror::Error;

/// Classification of a degenerate input point set.
///
/// Each variant is terminal: the input cannot seed a tetrahedron, so no
/// hull is constructed and no partial result is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Every input point has the same coordinates.
    #[error("all input points coincide")]
    SinglePoint,

    /// All input points lie on a single line.
    #[error("all input points are collinear")]
    Collinear,

    /// All input points lie on a single plane.
    #[error("all input points are coplanar")]
    Coplanar,
}

/// Top-level error type for hull construction.
#[derive(Debug, Error)]
pub enum HullError {
    #[error("degenerate input: {0}")]
    Degenerate(#[from] Degeneracy),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`HullError`].
pub type Result<T> = std::result::Result<T, HullError>;
