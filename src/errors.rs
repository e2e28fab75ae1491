// errors.rs
use thiserror::Error;

/// Errors raised by the web layer (routing, response building).
///
/// Provider failures never reach this type: the search path recovers from
/// them by serving the bundled sample listings.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::Internal(_) => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<astra::Response, ServerError>;
