//! Error types for the sr-app service layer.

use sr_graph::GraphError;

/// Application error type shared by every frontend.
///
/// Display strings are the messages shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("All fields are required!")]
    MissingInput { field: &'static str },

    #[error("Distance must be a number!")]
    MalformedDistance { input: String },

    #[error("Distance must be a finite, non-negative number (got {value})")]
    InvalidDistance { value: f64 },

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("No path exists from {from} to {to}.")]
    NoRoute { from: String, to: String },

    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Road network error: {0}")]
    Graph(GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for outcomes that are answers rather than bad input.
    pub fn is_informational(&self) -> bool {
        matches!(self, AppError::NoRoute { .. })
    }
}

/// Result type for sr-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<GraphError> for AppError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::EmptyLabel { role } => AppError::MissingInput { field: role },
            GraphError::NegativeWeight { value } | GraphError::NonFiniteWeight { value } => {
                AppError::InvalidDistance { value }
            }
            GraphError::UnknownLocation { label } => AppError::UnknownLocation(label),
            other => AppError::Graph(other),
        }
    }
}
