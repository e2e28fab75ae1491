mod mock_data;
mod provider;

pub use provider::PropertySearch;
