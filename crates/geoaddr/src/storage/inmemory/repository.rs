//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use geoaddr_core::address::{filter_by_longitude, Address, StoredAddress};
use geoaddr_core::storage::{AddressRepository, LongitudeRange, Result};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<StoredAddress>,
    last_id: i64,
}

/// In-memory storage backend.
///
/// IDs start at 1 and are never reused, mirroring SQLite `AUTOINCREMENT`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddressRepository for InMemoryRepository {
    async fn create_address(&self, address: &Address) -> Result<StoredAddress> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let stored = address.clone().into_stored(table.last_id);
        table.rows.push(stored.clone());

        Ok(stored)
    }

    async fn list_addresses(&self) -> Result<Vec<StoredAddress>> {
        let table = self.table.read().await;
        Ok(table.rows.clone())
    }

    async fn list_addresses_by_longitude(
        &self,
        range: LongitudeRange,
    ) -> Result<Vec<StoredAddress>> {
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let table = self.table.read().await;
        Ok(filter_by_longitude(&table.rows, range)
            .into_iter()
            .cloned()
            .collect())
    }
}
