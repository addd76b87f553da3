//! Errors raised while parsing or constructing addresses and blocks.

use thiserror::Error;

/// Failure to build an address or network block from its parts.
///
/// All variants are raised at parse/construction time. Merging never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Prefix length is negative or exceeds the address bit length.
    #[error("Invalid prefix {prefix} for address with maximum prefix of {max_prefix}")]
    InvalidPrefix { prefix: i64, max_prefix: u8 },

    /// Prefix text after `/` is not an integer.
    #[error("Malformed prefix '{0}'")]
    MalformedPrefix(String),

    /// Base address has bits set outside the prefix mask.
    #[error("Address {address} is not a valid network address for prefix /{prefix}")]
    InvalidNetworkAddress { address: String, prefix: u8 },

    /// Text matches neither the IPv4 nor the IPv6 grammar.
    #[error("Unrecognized address: {0}")]
    UnrecognizedAddress(String),
}
