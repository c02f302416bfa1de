use std::fmt;

// Domain-level errors for the epoch endpoints.
#[derive(Debug)]
pub enum ApiError {
    QueryFailed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::QueryFailed(err) => write!(f, "epoch query failed: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}
