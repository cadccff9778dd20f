mod error;
mod operations;
mod types;
mod validation;

pub use error::{FieldError, ValidationError};
pub use operations::{filter_by_longitude, views};
pub use types::{Address, AddressView, StoredAddress};
pub use validation::{validate_address, validate_longitude_range};
