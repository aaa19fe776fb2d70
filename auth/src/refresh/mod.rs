pub mod errors;
pub mod generator;

pub use errors::RefreshTokenError;
pub use generator::generate;
