use crate::storage::LongitudeRange;

use super::types::{AddressView, StoredAddress};

/// Filters records whose longitude falls inside the range (inclusive).
pub fn filter_by_longitude(
    addresses: &[StoredAddress],
    range: LongitudeRange,
) -> Vec<&StoredAddress> {
    addresses
        .iter()
        .filter(|address| range.contains(address.lng))
        .collect()
}

/// Maps stored records to their client-facing shape, preserving order.
pub fn views(addresses: &[StoredAddress]) -> Vec<AddressView> {
    addresses.iter().map(AddressView::from).collect()
}
