/// Failures at the JSON text boundary. Classification and icon resolution
/// themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input JSON: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("Invalid options JSON: {0}")]
    InvalidOptions(#[source] serde_json::Error),

    #[error("Expected a scalar value (null, boolean, number or string), got {0}")]
    NotScalar(&'static str),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
