//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use geoaddr_core::address::StoredAddress;
use rusqlite::Row;

/// Convert a SQLite row to a StoredAddress.
///
/// Expected columns: id, name, address, lat, lng
pub fn row_to_address(row: &Row) -> rusqlite::Result<StoredAddress> {
    Ok(StoredAddress {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        lat: row.get(3)?,
        lng: row.get(4)?,
    })
}
