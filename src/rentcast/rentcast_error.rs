use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentCastError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("RentCast API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}
