use thiserror::Error;

/// Top-level error type for geomkit.
#[derive(Debug, Error)]
pub enum GeomkitError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Errors from numeric operations that have no defined answer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MathError {
    #[error("lines are parallel")]
    ParallelLines,

    #[error("path must contain at least one point")]
    EmptyPath,

    #[error("zero-length vector")]
    ZeroVector,

    #[error("cannot round {value} to {digits} decimals (at most {max} supported)", max = crate::math::MAX_ROUND_DECIMALS)]
    DecimalsOutOfRange { value: f64, digits: i32 },

    #[error("value {value} is not finite")]
    NonFinite { value: f64 },
}

/// Errors from lexical path manipulation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("parent path must not be empty")]
    EmptyParent,

    #[error("no common directory between {parent:?} and {path:?}")]
    NoCommonDirectory { parent: String, path: String },
}

/// Convenience type alias for results using [`GeomkitError`].
pub type Result<T> = std::result::Result<T, GeomkitError>;
