//! Address and network block models.
//!
//! - [`Address`] - IPv4/IPv6 address value with its [`Family`]
//! - [`NetworkBlock`] - CIDR block with range and alignment checks
//! - [`prefix_to_mask`] - cached prefix length to bitmask table
//! - [`format_ipv6`] - compressed/exploded/dual IPv6 rendering

mod address;
mod block;
mod error;
mod format;
mod ipv4;
mod ipv6;
mod mask;

// Re-export public types
pub use address::{Address, Family};
pub use block::NetworkBlock;
pub use error::AddressError;
pub use format::{format_ipv6, DualMode, RenderOptions};
pub use ipv4::{parse_ipv4, render_ipv4};
pub use ipv6::{from_bytes, from_segments, parse_ipv6, to_bytes, to_segments, ParsedIpv6};
pub use mask::{full_mask, generate_masks, prefix_to_mask};
