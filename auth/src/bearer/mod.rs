pub mod errors;
pub mod extract;

pub use errors::BearerError;
pub use extract::api_key;
pub use extract::bearer_token;
