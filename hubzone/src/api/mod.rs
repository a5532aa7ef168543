//! REST contract types.
//!
//! The HTTP routing layer is an external collaborator; this module defines
//! the typed boundary it consumes. Loosely-typed wire input (query-string
//! page/limit, JSON check bodies) becomes validated structs here, and
//! service errors map to stable status codes and bodies. Nothing in this
//! module performs I/O.

mod types;

pub use types::{
    CheckRequest, CheckResponse, ErrorBody, ListParams, ListResponse, ZoneDetail,
};

use crate::service::ServiceError;

/// HTTP status for a service error.
pub fn error_status(error: &ServiceError) -> u16 {
    match error {
        ServiceError::InvalidCoordinates { .. } => 400,
        ServiceError::NotFound(_) => 404,
        ServiceError::ServiceUnavailable | ServiceError::Load(_) => 503,
    }
}

/// Wire body for a service error, with the messages the UI matches on.
pub fn error_body(error: &ServiceError) -> ErrorBody {
    let message = match error {
        ServiceError::InvalidCoordinates { .. } => "Invalid coordinates",
        ServiceError::NotFound(_) => "HUBZone not found",
        ServiceError::ServiceUnavailable | ServiceError::Load(_) => "Service unavailable",
    };
    ErrorBody {
        error: message.to_string(),
    }
}
