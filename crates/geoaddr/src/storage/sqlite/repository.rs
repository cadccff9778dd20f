//! SQLite repository implementation.
//!
//! Implements [`AddressRepository`] using SQLite.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use geoaddr_core::address::{Address, StoredAddress};
use geoaddr_core::storage::{AddressRepository, LongitudeRange, RepositoryError, Result};

use super::conversions::row_to_address;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds a single connection, opened once at startup. Every repository call
/// runs as one closure on the connection's worker thread, so statements from
/// concurrent requests never interleave.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The schema is created automatically.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        tracing::debug!(path = %path.display(), "Opening SQLite database");

        let conn = Connection::open(&path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl AddressRepository for SqliteRepository {
    async fn create_address(&self, address: &Address) -> Result<StoredAddress> {
        let name = address.name.clone();
        let text = address.address.clone();
        let lat = address.lat;
        let lng = address.lng;

        tracing::debug!(sql = schema::INSERT_ADDRESS.trim(), "Executing");

        self.conn
            .call(move |conn| {
                // Dropping the transaction without commit rolls it back
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(schema::INSERT_ADDRESS, rusqlite::params![name, text, lat, lng])
                    .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();

                let stored = tx
                    .query_row(schema::SELECT_ADDRESS_BY_ID, [id], row_to_address)
                    .map_err(wrap_err)?;

                tx.commit().map_err(wrap_err)?;
                Ok(stored)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_addresses(&self) -> Result<Vec<StoredAddress>> {
        tracing::debug!(sql = schema::SELECT_ALL_ADDRESSES.trim(), "Executing");

        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_ADDRESSES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_address).map_err(wrap_err)?;

                let mut addresses = Vec::new();
                for row_result in rows {
                    addresses.push(row_result.map_err(wrap_err)?);
                }
                Ok(addresses)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_addresses_by_longitude(
        &self,
        range: LongitudeRange,
    ) -> Result<Vec<StoredAddress>> {
        if range.is_empty() {
            tracing::debug!(from = range.from, to = range.to, "Empty longitude range");
            return Ok(Vec::new());
        }

        tracing::debug!(
            sql = schema::SELECT_ADDRESSES_BY_LONGITUDE_RANGE.trim(),
            from = range.from,
            to = range.to,
            "Executing"
        );

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ADDRESSES_BY_LONGITUDE_RANGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![range.from, range.to], row_to_address)
                    .map_err(wrap_err)?;

                let mut addresses = Vec::new();
                for row_result in rows {
                    addresses.push(row_result.map_err(wrap_err)?);
                }
                Ok(addresses)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = repo().await;

        let first = repo
            .create_address(&Address::new("Cafe", 40.7, -74.0))
            .await
            .unwrap();
        let second = repo
            .create_address(&Address::new("Cafe", 40.7, -74.0))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.name, second.name);
    }

    #[tokio::test]
    async fn test_create_returns_stored_fields() {
        let repo = repo().await;
        let address = Address::new("Library", 51.5, -0.12).with_address("96 Euston Rd");

        let stored = repo.create_address(&address).await.unwrap();

        assert_eq!(stored, address.into_stored(stored.id));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = repo().await;

        assert!(repo.list_addresses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let repo = repo().await;
        for name in ["a", "b", "c"] {
            repo.create_address(&Address::new(name, 0.0, 0.0))
                .await
                .unwrap();
        }

        let names: Vec<String> = repo
            .list_addresses()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_longitude_range_is_inclusive() {
        let repo = repo().await;
        for (name, lng) in [("w", -75.0), ("mid", -74.0), ("e", -73.0), ("out", 10.0)] {
            repo.create_address(&Address::new(name, 0.0, lng))
                .await
                .unwrap();
        }

        let found = repo
            .list_addresses_by_longitude(LongitudeRange::new(-75.0, -73.0))
            .await
            .unwrap();
        let names: Vec<&str> = found.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(names, vec!["w", "mid", "e"]);
    }

    #[tokio::test]
    async fn test_reversed_longitude_range_is_empty() {
        let repo = repo().await;
        repo.create_address(&Address::new("Cafe", 40.7, -74.0))
            .await
            .unwrap();

        let found = repo
            .list_addresses_by_longitude(LongitudeRange::new(-73.0, -75.0))
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_nan_longitude_bound_is_empty() {
        let repo = repo().await;
        repo.create_address(&Address::new("Cafe", 40.7, -74.0))
            .await
            .unwrap();

        let found = repo
            .list_addresses_by_longitude(LongitudeRange::new(f64::NAN, 180.0))
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_long_name_is_stored() {
        let repo = repo().await;
        let name = "x".repeat(80);

        let stored = repo
            .create_address(&Address::new(name.clone(), 0.0, 0.0))
            .await
            .unwrap();

        assert_eq!(stored.name, name);
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite3");

        {
            let repo = SqliteRepository::new(&path).await.unwrap();
            repo.create_address(&Address::new("Cafe", 40.7, -74.0))
                .await
                .unwrap();
        }

        let repo = SqliteRepository::new(&path).await.unwrap();
        let all = repo.list_addresses().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].name, "Cafe");
    }
}
