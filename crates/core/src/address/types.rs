use serde::{Deserialize, Serialize};

/// A validated address record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    /// Free-text address line.
    pub address: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl Address {
    /// Creates a new address without a free-text address line.
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            address: None,
            lat,
            lng,
        }
    }

    /// Sets the free-text address line.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Attaches a storage identifier, producing the persisted form.
    pub fn into_stored(self, id: i64) -> StoredAddress {
        StoredAddress {
            id,
            name: self.name,
            address: self.address,
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// An address record as it exists in storage.
///
/// `id` is assigned by the storage backend on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAddress {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

/// Client-facing shape of an address.
///
/// The storage identifier is deliberately absent. `address` is always
/// serialized, as `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressView {
    pub name: String,
    pub address: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl From<&StoredAddress> for AddressView {
    fn from(stored: &StoredAddress) -> Self {
        Self {
            name: stored.name.clone(),
            address: stored.address.clone(),
            lat: stored.lat,
            lng: stored.lng,
        }
    }
}

impl From<StoredAddress> for AddressView {
    fn from(stored: StoredAddress) -> Self {
        Self {
            name: stored.name,
            address: stored.address,
            lat: stored.lat,
            lng: stored.lng,
        }
    }
}
