pub mod banner;
pub mod card;
pub mod error;
pub mod format;
pub mod pagination;
pub mod search_form;

pub use banner::demo_banner;
pub use card::property_card;
pub use error::html_error_response;
pub use pagination::pagination;
pub use search_form::search_form;
