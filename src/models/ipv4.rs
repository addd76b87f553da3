//! IPv4 dotted-decimal parsing and rendering.

use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Bit length of an IPv4 address.
pub const ADDRESS_LENGTH: u8 = 32;

lazy_static! {
    static ref OCTET: Regex = Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex?");
}

/// Parse dotted-decimal text into its 32-bit big-endian value.
///
/// Returns `None` if the text is not an IPv4 address, so callers can probe
/// other grammars.
///
/// # Examples
/// ```
/// use ipmerge::models::parse_ipv4;
/// assert_eq!(parse_ipv4("10.0.0.1"), Some(0x0A000001));
/// assert_eq!(parse_ipv4("10.0.0.256"), None);
/// ```
pub fn parse_ipv4(text: &str) -> Option<u32> {
    let octets: Vec<&str> = text.trim().split('.').collect();
    if octets.len() != 4 {
        return None;
    }

    let mut address: u32 = 0;
    for octet in octets {
        if !OCTET.is_match(octet) {
            return None;
        }
        let value: u32 = octet.parse().ok()?;
        if value > 255 {
            return None;
        }
        address = (address << 8) | value;
    }
    Some(address)
}

/// Render a 32-bit value as dotted decimal, most significant byte first.
pub fn render_ipv4(address: u32) -> String {
    Ipv4Addr::from(address).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4() {
        assert_eq!(parse_ipv4("0.0.0.0"), Some(0));
        assert_eq!(parse_ipv4("255.255.255.255"), Some(u32::MAX));
        assert_eq!(parse_ipv4("192.168.1.42"), Some(0xC0A8012A));
        assert_eq!(parse_ipv4(" 10.0.0.0 "), Some(0x0A000000));
    }

    #[test]
    fn test_parse_ipv4_leading_zeros() {
        // leading zeros are read as decimal, not octal
        assert_eq!(parse_ipv4("010.0.0.0"), Some(0x0A000000));
        assert_eq!(parse_ipv4("192.168.001.010"), Some(0xC0A8010A));
        assert_eq!(parse_ipv4("0010.0.0.0"), None);
    }

    #[test]
    fn test_parse_ipv4_rejects() {
        assert_eq!(parse_ipv4("10.0.0"), None);
        assert_eq!(parse_ipv4("10.0.0.0.0"), None);
        assert_eq!(parse_ipv4("10.0.0.256"), None);
        assert_eq!(parse_ipv4("10.0.-1.0"), None);
        assert_eq!(parse_ipv4("10..0.0"), None);
        assert_eq!(parse_ipv4("a.b.c.d"), None);
        assert_eq!(parse_ipv4("::1"), None);
    }

    #[test]
    fn test_render_ipv4() {
        assert_eq!(render_ipv4(0x0A0000FF), "10.0.0.255");
        assert_eq!(render_ipv4(0), "0.0.0.0");
    }
}
