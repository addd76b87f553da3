//! Prefix length to bitmask conversion.
//!
//! Masks are generated once per address bit length and kept in a
//! process-wide table. Entries are never invalidated.

use super::AddressError;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

lazy_static! {
    static ref MASKS_FOR_PREFIXES: RwLock<HashMap<u8, Arc<Vec<u128>>>> =
        RwLock::new(HashMap::new());
}

/// Generate the masks for every prefix `0..=bit_length`.
///
/// # Examples
/// ```
/// use ipmerge::models::generate_masks;
/// assert_eq!(generate_masks(4), vec![0b0000, 0b1000, 0b1100, 0b1110, 0b1111]);
/// ```
pub fn generate_masks(bit_length: u8) -> Vec<u128> {
    let mut masks = Vec::with_capacity(bit_length as usize + 1);
    masks.push(0u128);
    for p in 1..=bit_length {
        let previous = masks[p as usize - 1];
        masks.push(previous | (1u128 << (bit_length - p)));
    }
    masks
}

fn masks_for(bit_length: u8) -> Arc<Vec<u128>> {
    if let Some(masks) = MASKS_FOR_PREFIXES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&bit_length)
    {
        return Arc::clone(masks);
    }

    // A racing writer stores an identical table, so last one wins.
    let masks = Arc::new(generate_masks(bit_length));
    log::trace!("generated {} masks for bit length {bit_length}", masks.len());
    MASKS_FOR_PREFIXES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(bit_length, Arc::clone(&masks));
    masks
}

/// Convert a prefix length to a mask for an address of `bit_length` bits.
///
/// # Examples
/// ```
/// use ipmerge::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(32, 24).unwrap(), 0xFFFFFF00);
/// assert!(prefix_to_mask(32, 33).is_err());
/// ```
pub fn prefix_to_mask(bit_length: u8, prefix: i64) -> Result<u128, AddressError> {
    let invalid = || AddressError::InvalidPrefix {
        prefix,
        max_prefix: bit_length,
    };
    let index = usize::try_from(prefix).map_err(|_| invalid())?;
    masks_for(bit_length).get(index).copied().ok_or_else(invalid)
}

/// All-ones value for an address of `bit_length` bits.
pub fn full_mask(bit_length: u8) -> u128 {
    if bit_length >= 128 {
        u128::MAX
    } else {
        (1u128 << bit_length) - 1
    }
}
