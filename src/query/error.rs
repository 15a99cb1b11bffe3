use thiserror::Error;

/// Failures reported by the geometric queries of this crate.
///
/// Geometry and precondition problems are always surfaced through this type;
/// they are never silently collapsed into a "no collision" answer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A polygon had fewer than three vertices.
    #[error("invalid polygon: at least three vertices are required")]
    InvalidGeometry,

    /// EPA was invoked without a terminal simplex enclosing the origin.
    #[error("EPA requires a triangle simplex enclosing the origin")]
    PreconditionViolated,

    /// GJK gave up before reaching a verdict.
    ///
    /// The public pipelines report this as "no collision", but it stays
    /// distinguishable from a genuine separation for diagnostics.
    #[error("GJK exceeded its iteration limit")]
    IterationLimitExceeded,

    /// EPA's polytope expansion stopped making progress.
    #[error("EPA polytope expansion stalled")]
    Stalled,

    /// A zero-length normalization or a parallel-line intersection was
    /// attempted.
    #[error("degenerate numeric input")]
    DegenerateNumeric,
}
