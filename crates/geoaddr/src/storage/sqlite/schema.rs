//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the address table.
///
/// `VARCHAR(50)` documents the intended bound on `name`; SQLite does not
/// enforce declared lengths.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS address (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(50) NOT NULL,
    address TEXT,
    lat REAL NOT NULL,
    lng REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS ix_address_id ON address(id);
"#;

pub const INSERT_ADDRESS: &str = r#"
INSERT INTO address (name, address, lat, lng)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_ADDRESS_BY_ID: &str = r#"
SELECT id, name, address, lat, lng
FROM address
WHERE id = ?1
"#;

pub const SELECT_ALL_ADDRESSES: &str = r#"
SELECT id, name, address, lat, lng
FROM address
ORDER BY id ASC
"#;

pub const SELECT_ADDRESSES_BY_LONGITUDE_RANGE: &str = r#"
SELECT id, name, address, lat, lng
FROM address
WHERE lng >= ?1 AND lng <= ?2
ORDER BY id ASC
"#;
