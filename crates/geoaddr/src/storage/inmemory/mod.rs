//! In-memory storage backend.
//!
//! Stores records in a `Vec` behind `Arc<RwLock<_>>`. Nothing is persisted;
//! data is lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use geoaddr::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
