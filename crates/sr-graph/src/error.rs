//! Graph-specific error types.

use sr_core::{NodeId, Real};

pub type GraphResult<T> = Result<T, GraphError>;

/// Road network mutation and lookup errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A road endpoint label is empty.
    EmptyLabel { role: &'static str },

    /// A road distance is NaN or infinite.
    NonFiniteWeight { value: Real },

    /// A road distance is below zero.
    NegativeWeight { value: Real },

    /// A label was never registered.
    UnknownLocation { label: String },

    /// An adjacency entry has no mirrored entry on the other endpoint.
    AsymmetricEdge {
        from: String,
        to: String,
        weight: Real,
    },

    /// ID not present in the registry.
    IdNotFound { id: NodeId },

    /// The locations are connected but every route sums past `Real::MAX`.
    DistanceOverflow { from: String, to: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::EmptyLabel { role } => {
                write!(f, "{} location must not be empty", role)
            }
            GraphError::NonFiniteWeight { value } => {
                write!(f, "Road distance must be finite (got {})", value)
            }
            GraphError::NegativeWeight { value } => {
                write!(f, "Road distance must not be negative (got {})", value)
            }
            GraphError::UnknownLocation { label } => {
                write!(f, "Unknown location: {}", label)
            }
            GraphError::AsymmetricEdge { from, to, weight } => {
                write!(
                    f,
                    "Road {} -> {} ({}) has no matching entry on {}",
                    from, to, weight, to
                )
            }
            GraphError::IdNotFound { id } => {
                write!(f, "Location id {} not found in registry", id)
            }
            GraphError::DistanceOverflow { from, to } => {
                write!(f, "Distance from {} to {} is too large to represent", from, to)
            }
        }
    }
}

impl std::error::Error for GraphError {}
