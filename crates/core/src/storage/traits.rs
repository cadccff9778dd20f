use async_trait::async_trait;

use crate::address::{Address, StoredAddress};

use super::{LongitudeRange, Result};

/// Repository for address records.
///
/// Each method is one self-contained unit of work: it either completes
/// entirely or leaves storage untouched.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Stores a new address and returns it with its assigned ID.
    async fn create_address(&self, address: &Address) -> Result<StoredAddress>;

    /// Lists every stored address in insertion order.
    async fn list_addresses(&self) -> Result<Vec<StoredAddress>>;

    /// Lists addresses whose longitude lies within the range (inclusive).
    async fn list_addresses_by_longitude(
        &self,
        range: LongitudeRange,
    ) -> Result<Vec<StoredAddress>>;
}
