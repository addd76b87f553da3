//! IPv6 text parsing and segment conversion.

use super::ipv4::parse_ipv4;
use lazy_static::lazy_static;
use regex::Regex;

/// Bit length of an IPv6 address.
pub const ADDRESS_LENGTH: u8 = 128;

/// Number of 16-bit segments in an IPv6 address.
pub const SEGMENT_COUNT: usize = 8;

lazy_static! {
    static ref HEXTET: Regex = Regex::new(r"^[0-9A-Fa-f]{1,4}$").expect("Invalid Regex?");
}

/// Result of parsing IPv6 text: the 128-bit value and whether it carried an
/// embedded dotted-decimal tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedIpv6 {
    pub value: u128,
    pub dual: bool,
}

/// Split a 128-bit value into 8 big-endian segments.
pub fn to_segments(value: u128) -> [u16; SEGMENT_COUNT] {
    let mut segments = [0u16; SEGMENT_COUNT];
    for (i, segment) in segments.iter_mut().enumerate() {
        *segment = (value >> (16 * (SEGMENT_COUNT - 1 - i))) as u16;
    }
    segments
}

/// Join 8 big-endian segments into a 128-bit value.
pub fn from_segments(segments: &[u16; SEGMENT_COUNT]) -> u128 {
    segments
        .iter()
        .fold(0u128, |acc, &segment| (acc << 16) | segment as u128)
}

/// 16-byte big-endian buffer for a 128-bit value.
pub fn to_bytes(value: u128) -> [u8; 16] {
    value.to_be_bytes()
}

/// 128-bit value from a 16-byte big-endian buffer.
pub fn from_bytes(bytes: [u8; 16]) -> u128 {
    u128::from_be_bytes(bytes)
}

/// Parse the groups on one side of a `::`. Empty text yields no segments.
///
/// `allow_dual` permits a dotted-decimal final group. Returns the segments
/// and whether such a tail was present.
fn parse_groups(text: &str, allow_dual: bool) -> Option<(Vec<u16>, bool)> {
    let mut segments = Vec::with_capacity(SEGMENT_COUNT);
    if text.is_empty() {
        return Some((segments, false));
    }

    let groups: Vec<&str> = text.split(':').collect();
    let last = groups.len() - 1;
    let mut dual = false;
    for (i, group) in groups.iter().enumerate() {
        if group.contains('.') {
            if !allow_dual || i != last {
                return None;
            }
            let ipv4 = parse_ipv4(group)?;
            segments.push((ipv4 >> 16) as u16);
            segments.push(ipv4 as u16);
            dual = true;
        } else if HEXTET.is_match(group) {
            segments.push(u16::from_str_radix(group, 16).ok()?);
        } else {
            return None;
        }
    }
    Some((segments, dual))
}

/// Parse IPv6 text, including `::` compression and an embedded IPv4 tail.
///
/// Returns `None` if the text is not an IPv6 address.
///
/// # Examples
/// ```
/// use ipmerge::models::parse_ipv6;
/// assert_eq!(parse_ipv6("::1").unwrap().value, 1);
/// assert!(parse_ipv6("::ffff:192.0.2.1").unwrap().dual);
/// assert!(parse_ipv6("1::2::3").is_none());
/// ```
pub fn parse_ipv6(text: &str) -> Option<ParsedIpv6> {
    let text = text.trim();
    if text == "::" {
        return Some(ParsedIpv6 {
            value: 0,
            dual: false,
        });
    }

    let halves: Vec<&str> = text.split("::").collect();
    let (segments, dual) = match halves.as_slice() {
        [whole] => {
            let (segments, dual) = parse_groups(whole, true)?;
            if segments.len() != SEGMENT_COUNT {
                return None;
            }
            (segments, dual)
        }
        [head, tail] => {
            let (mut segments, _) = parse_groups(head, false)?;
            let (tail_segments, dual) = parse_groups(tail, true)?;
            // the fill point stands for at least one zero segment
            if segments.len() + tail_segments.len() >= SEGMENT_COUNT {
                return None;
            }
            let fill = SEGMENT_COUNT - segments.len() - tail_segments.len();
            segments.extend(std::iter::repeat(0u16).take(fill));
            segments.extend(tail_segments);
            (segments, dual)
        }
        _ => return None,
    };

    let segments: [u16; SEGMENT_COUNT] = segments.try_into().ok()?;
    Some(ParsedIpv6 {
        value: from_segments(&segments),
        dual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(text: &str) -> u128 {
        parse_ipv6(text)
            .unwrap_or_else(|| panic!("{text} should parse"))
            .value
    }

    #[test]
    fn test_parse_full() {
        assert_eq!(
            value("2001:0db8:0000:0000:0000:0000:0000:0001"),
            0x2001_0db8_0000_0000_0000_0000_0000_0001
        );
        assert_eq!(value("0:0:0:0:0:0:0:1"), 1);
        assert_eq!(value("FFFF:ffff:FfFf:ffff:ffff:ffff:ffff:ffff"), u128::MAX);
    }

    #[test]
    fn test_parse_compressed() {
        assert_eq!(value("::"), 0);
        assert_eq!(value("::1"), 1);
        assert_eq!(value("1::"), 1u128 << 112);
        assert_eq!(value("2001:db8::1"), 0x2001_0db8_0000_0000_0000_0000_0000_0001);
        assert_eq!(value("1:2:3:4:5:6:7::"), 0x0001_0002_0003_0004_0005_0006_0007_0000);
        assert_eq!(value("::2:3:4:5:6:7:8"), 0x0000_0002_0003_0004_0005_0006_0007_0008);
    }

    #[test]
    fn test_parse_dual() {
        let parsed = parse_ipv6("::ffff:192.0.2.1").unwrap();
        assert!(parsed.dual);
        assert_eq!(parsed.value, 0xffff_c000_0201);

        let parsed = parse_ipv6("0:0:0:0:0:ffff:10.0.0.1").unwrap();
        assert!(parsed.dual);
        assert_eq!(parsed.value, 0xffff_0a00_0001);

        assert!(!parse_ipv6("::ffff:c000:201").unwrap().dual);
    }

    #[test]
    fn test_parse_rejects() {
        assert!(parse_ipv6("1::2::3").is_none());
        assert!(parse_ipv6("1:2:3:4:5:6:7:8:9").is_none());
        assert!(parse_ipv6("1:2:3:4:5:6:7").is_none());
        assert!(parse_ipv6("1:2:3:4::5:6:7:8").is_none());
        assert!(parse_ipv6("12345::").is_none());
        assert!(parse_ipv6("g::1").is_none());
        assert!(parse_ipv6(":1:2:3:4:5:6:7").is_none());
        assert!(parse_ipv6("1:2:3:4:5:6:7:").is_none());
        assert!(parse_ipv6("::1.2.3.4:5").is_none());
        assert!(parse_ipv6("1.2.3.4::").is_none());
        assert!(parse_ipv6("::1.2.3.256").is_none());
        assert!(parse_ipv6("10.0.0.1").is_none());
        assert!(parse_ipv6(":::").is_none());
        assert!(parse_ipv6("").is_none());
    }

    #[test]
    fn test_segments() {
        let v = 0x2001_0db8_0000_0000_0000_0000_0000_0001u128;
        let segments = to_segments(v);
        assert_eq!(segments, [0x2001, 0x0db8, 0, 0, 0, 0, 0, 1]);
        assert_eq!(from_segments(&segments), v);
        assert_eq!(from_bytes(to_bytes(v)), v);
        assert_eq!(to_bytes(v)[0], 0x20);
    }
}
