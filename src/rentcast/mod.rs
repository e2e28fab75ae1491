mod client;
mod models;
mod rentcast_error;

pub use client::RentCastClient;
pub use rentcast_error::RentCastError;
