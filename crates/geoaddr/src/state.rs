//! Application state shared by all request handlers.

use std::{sync::Arc, time::Duration};

use geoaddr_core::storage::AddressRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request. The repository is the process-wide storage
/// handle: it is opened once at startup and every handler borrows it for a
/// single unit of work.
#[derive(Clone)]
pub struct AppState {
    pub address_repo: Arc<dyn AddressRepository>,
    /// Requests running longer than this are answered with 408.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState around an existing repository.
    pub fn new(address_repo: Arc<dyn AddressRepository>, config: &Config) -> Self {
        Self {
            address_repo,
            request_timeout: config.request_timeout(),
        }
    }

    /// Opens the configured storage backend and creates its schema.
    #[cfg(feature = "sqlite")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::SqliteRepository;

        let repo = SqliteRepository::new(&config.sqlite_path).await?;
        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");

        Ok(Self::new(Arc::new(repo), config))
    }

    /// Opens the configured storage backend.
    #[cfg(not(feature = "sqlite"))]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        tracing::warn!("Built without the `sqlite` feature, data will not be persisted");

        Ok(Self::in_memory(config))
    }

    /// Creates state backed by an empty in-memory repository.
    pub fn in_memory(config: &Config) -> Self {
        Self::new(Arc::new(crate::storage::InMemoryRepository::new()), config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(&Config {
            sqlite_path: String::new(),
            request_timeout_seconds: 10,
        })
    }
}
