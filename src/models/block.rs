//! CIDR network block: an address plus a prefix length.

use super::address::{Address, Family};
use super::format::{DualMode, RenderOptions};
use super::mask::{full_mask, prefix_to_mask};
use super::AddressError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

/// A network block whose base address is aligned to its prefix.
#[derive(Debug, Clone, Copy)]
pub struct NetworkBlock {
    address: Address,
    prefix: u8,
    mask: u128,
}

impl NetworkBlock {
    /// Create a block, failing if `address` has host bits set for `prefix`.
    pub fn new(address: Address, prefix: u8) -> Result<NetworkBlock, AddressError> {
        let mask = prefix_to_mask(address.address_length(), i64::from(prefix))?;
        if address.value() & !mask != 0 {
            return Err(AddressError::InvalidNetworkAddress {
                address: address.to_string(),
                prefix,
            });
        }
        Ok(NetworkBlock {
            address,
            prefix,
            mask,
        })
    }

    /// Parse `ADDRESS[/PREFIX]`. A missing prefix means a host route.
    ///
    /// # Examples
    /// ```
    /// use ipmerge::models::NetworkBlock;
    /// let block = NetworkBlock::parse("10.0.0.0/24").unwrap();
    /// assert_eq!(block.to_string(), "10.0.0.0/24");
    /// assert!(NetworkBlock::parse("10.0.0.1/24").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<NetworkBlock, AddressError> {
        let text = text.trim();
        let (address_text, prefix_text) = match text.split_once('/') {
            Some((address, prefix)) => (address, Some(prefix)),
            None => (text, None),
        };

        let address = Address::parse(address_text)
            .ok_or_else(|| AddressError::UnrecognizedAddress(address_text.trim().to_string()))?;
        let max_prefix = address.address_length();

        let prefix = match prefix_text {
            None => max_prefix,
            Some(prefix_text) => {
                let prefix: i64 = prefix_text
                    .trim()
                    .parse()
                    .map_err(|_| AddressError::MalformedPrefix(prefix_text.to_string()))?;
                if prefix < 0 || prefix > i64::from(max_prefix) {
                    return Err(AddressError::InvalidPrefix { prefix, max_prefix });
                }
                prefix as u8
            }
        };

        log::trace!("parsed {text} as {} /{prefix}", address.family());
        NetworkBlock::new(address, prefix)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> u128 {
        self.mask
    }

    pub fn family(&self) -> Family {
        self.address.family()
    }

    /// Lowest address in the block (the base address).
    pub fn first_address(&self) -> u128 {
        self.address.value()
    }

    /// Highest address in the block.
    pub fn last_address(&self) -> u128 {
        self.address.value() | (!self.mask & full_mask(self.address.address_length()))
    }

    /// Number of addresses covered. Saturates at `u128::MAX` for `::/0`.
    pub fn size(&self) -> u128 {
        (self.last_address() - self.first_address()).saturating_add(1)
    }

    /// True if `other` lies entirely inside this block.
    pub fn contains(&self, other: &NetworkBlock) -> bool {
        self.family() == other.family()
            && self.first_address() <= other.first_address()
            && other.last_address() <= self.last_address()
    }

    /// True if the base address is also a valid network address one prefix
    /// bit coarser, i.e. this block is the lower half of its parent.
    pub fn is_aligned_to_parent(&self) -> bool {
        match self.prefix.checked_sub(1) {
            Some(parent) => prefix_to_mask(self.address.address_length(), i64::from(parent))
                .map(|parent_mask| self.address.value() & !parent_mask == 0)
                .unwrap_or(false),
            None => false,
        }
    }

    /// Render as `<address>/<prefix>`.
    pub fn render(&self, options: RenderOptions, mode: DualMode) -> String {
        format!("{}/{}", self.address.render(options, mode), self.prefix)
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl PartialEq for NetworkBlock {
    fn eq(&self, other: &NetworkBlock) -> bool {
        self.address == other.address && self.prefix == other.prefix
    }
}

impl Eq for NetworkBlock {}

impl Ord for NetworkBlock {
    fn cmp(&self, other: &NetworkBlock) -> Ordering {
        self.address
            .cmp(&other.address)
            .then(self.prefix.cmp(&other.prefix))
    }
}

impl PartialOrd for NetworkBlock {
    fn partial_cmp(&self, other: &NetworkBlock) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkBlock::parse(&s).map_err(de::Error::custom)
    }
}
