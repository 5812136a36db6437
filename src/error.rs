use thiserror::Error;

/// Errors produced by the geometry kernel.
///
/// The kernel prefers well-defined degenerate outputs over errors on its
/// hot predicate paths; an error is raised only where a degenerate input
/// has no meaningful result at all.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("singular transform: determinant is zero")]
    SingularTransform,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
