//! Core types and pure functions for the geoaddr service.
//!
//! Nothing in this crate performs I/O. Storage backends and HTTP handlers
//! live in the `geoaddr` binary crate and build on the types defined here.

pub mod address;
pub mod storage;
