//! Immutable IPv4/IPv6 address value.

use super::format::{format_ipv6, DualMode, RenderOptions};
use super::ipv4::{self, parse_ipv4, render_ipv4};
use super::ipv6::{self, parse_ipv6};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Ipv4,
    Ipv6,
}

impl Family {
    /// Bit length of addresses in this family.
    pub fn address_length(self) -> u8 {
        match self {
            Family::Ipv4 => ipv4::ADDRESS_LENGTH,
            Family::Ipv6 => ipv6::ADDRESS_LENGTH,
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::Ipv4 => write!(f, "IPv4"),
            Family::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// An IPv4 or IPv6 address.
///
/// Equality, ordering and hashing use the family and integer value only; the
/// IPv6 `dual` flag is a rendering hint.
#[derive(Debug, Copy, Clone)]
pub enum Address {
    V4(u32),
    V6 { value: u128, dual: bool },
}

impl Address {
    /// Parse address text. The family is picked by a `:` (IPv6) or `.` (IPv4)
    /// in the text; `None` if the text matches neither grammar.
    pub fn parse(text: &str) -> Option<Address> {
        let text = text.trim();
        if text.contains(':') {
            parse_ipv6(text).map(|p| Address::V6 {
                value: p.value,
                dual: p.dual,
            })
        } else if text.contains('.') {
            parse_ipv4(text).map(Address::V4)
        } else {
            None
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::Ipv4,
            Address::V6 { .. } => Family::Ipv6,
        }
    }

    /// Bit length: 32 or 128.
    pub fn address_length(&self) -> u8 {
        self.family().address_length()
    }

    /// Integer form of the address.
    pub fn value(&self) -> u128 {
        match *self {
            Address::V4(value) => value as u128,
            Address::V6 { value, .. } => value,
        }
    }

    /// Whether the address carries an embedded IPv4 tail. Always false for IPv4.
    pub fn is_dual(&self) -> bool {
        matches!(self, Address::V6 { dual: true, .. })
    }

    /// The address produced by merging `self` with `other`: same value as
    /// `self`, dual only if both inputs were dual.
    pub fn merged_with(&self, other: &Address) -> Address {
        match *self {
            Address::V4(value) => Address::V4(value),
            Address::V6 { value, dual } => Address::V6 {
                value,
                dual: dual && other.is_dual(),
            },
        }
    }

    /// Render the address. IPv4 ignores `options` and `mode`.
    pub fn render(&self, options: RenderOptions, mode: DualMode) -> String {
        match *self {
            Address::V4(value) => render_ipv4(value),
            Address::V6 { value, dual } => format_ipv6(value, dual, options, mode),
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.render(RenderOptions::default(), DualMode::ValueDependent)
        )
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Address) -> bool {
        self.family() == other.family() && self.value() == other.value()
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family().hash(state);
        self.value().hash(state);
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Address) -> Ordering {
        (self.family(), self.value()).cmp(&(other.family(), other.value()))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
