pub mod property;
pub mod query;

pub use property::{Property, SearchParams, SearchResult};
pub use query::normalize_query;
