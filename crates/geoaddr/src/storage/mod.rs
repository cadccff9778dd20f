//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! `geoaddr_core::storage::AddressRepository`.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! The in-memory backend is always compiled. It backs the router tests and
//! serves requests when the binary is built with `--no-default-features`.

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
