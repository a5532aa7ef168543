//! Service error taxonomy.

use crate::coord::CoordError;
use crate::loader::LoadError;

/// Errors surfaced by [`LookupService`](super::LookupService) operations.
///
/// Cancellation is deliberately absent: a cancelled call completes with
/// [`Outcome::Cancelled`](super::Outcome), not an error.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Caller-supplied coordinates are non-finite or out of range.
    /// Surfaced to HTTP callers as a 400; never retried.
    #[error("Invalid coordinates ({lat}, {lon}): {source}")]
    InvalidCoordinates {
        lat: f64,
        lon: f64,
        source: CoordError,
    },

    /// Unknown zone id. Surfaced as a 404.
    #[error("HUBZone not found: {0}")]
    NotFound(String),

    /// No snapshot has ever loaded successfully. All lookups fail fast
    /// with this until the first load lands.
    #[error("No zone dataset loaded")]
    ServiceUnavailable,

    /// Dataset reload failed at the container level. The previous
    /// snapshot remains authoritative.
    #[error("Dataset load failed: {0}")]
    Load(#[from] LoadError),
}
