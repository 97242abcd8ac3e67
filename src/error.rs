use std::borrow::Cow;

use crate::Point;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the search engine and its point-file plumbing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The four points are collinear or coincide, so the hull is neither a
    /// quadrilateral nor a triangle with a strictly interior point.
    #[error("degenerate quad {points:?}: {reason}")]
    MalformedQuad { points: [Point; 4], reason: Cow<'static, str> },

    /// An operation that requires an instance without empty substructures
    /// was handed one that has at least one.
    #[error("{operation} requires an instance without empty substructures, but found an empty {found}")]
    PreconditionViolation { operation: &'static str, found: Cow<'static, str> },

    #[error("unknown substructure kind `{0}`")]
    UnknownKind(String),

    #[error("point set is empty")]
    EmptyPointSet,

    #[error("line {line}: {message}")]
    Parse { line: usize, message: Cow<'static, str> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
