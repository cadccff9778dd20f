pub mod addresses;
pub mod error;
pub mod root;

pub use error::AppError;
