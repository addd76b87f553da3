//! IPv6 text rendering: compressed, exploded and dual (IPv4 tail) forms.

use super::ipv4::render_ipv4;
use super::ipv6::to_segments;
use itertools::Itertools;

/// When to render the low 32 bits of an IPv6 address as dotted decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DualMode {
    /// Always pure hex.
    ForceNormal,
    /// Dotted tail only if the address was written or derived that way.
    #[default]
    ValueDependent,
    /// Always with a dotted tail.
    ForceDual,
}

impl DualMode {
    /// Effective dual rendering for an address carrying `dual`.
    pub fn renders_dual(self, dual: bool) -> bool {
        match self {
            DualMode::ForceNormal => false,
            DualMode::ValueDependent => dual,
            DualMode::ForceDual => true,
        }
    }
}

/// Rendering options applied uniformly to every IPv6 address in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub compressed: bool,
    pub uppercase: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            compressed: true,
            uppercase: false,
        }
    }
}

#[derive(Copy, Clone, Default)]
struct Span {
    start: usize,
    len: usize,
}

/// Leftmost longest run of zero segments.
fn longest_zero_run(segments: &[u16]) -> Span {
    let mut longest = Span::default();
    let mut current = Span::default();

    for (i, &segment) in segments.iter().enumerate() {
        if segment == 0 {
            if current.len == 0 {
                current.start = i;
            }
            current.len += 1;
            // strictly longer keeps the leftmost run on ties
            if current.len > longest.len {
                longest = current;
            }
        } else {
            current = Span::default();
        }
    }
    longest
}

fn hex(segment: u16, options: RenderOptions) -> String {
    match (options.compressed, options.uppercase) {
        (true, false) => format!("{segment:x}"),
        (true, true) => format!("{segment:X}"),
        (false, false) => format!("{segment:04x}"),
        (false, true) => format!("{segment:04X}"),
    }
}

fn join_segments(segments: &[u16], options: RenderOptions) -> String {
    segments.iter().map(|&s| hex(s, options)).join(":")
}

/// Render a 128-bit value as IPv6 text.
///
/// # Examples
/// ```
/// use ipmerge::models::{format_ipv6, DualMode, RenderOptions};
/// let text = format_ipv6(0xffff_c000_0201, true, RenderOptions::default(), DualMode::ForceNormal);
/// assert_eq!(text, "::ffff:c000:201");
/// ```
pub fn format_ipv6(value: u128, dual: bool, options: RenderOptions, mode: DualMode) -> String {
    let segments = to_segments(value);
    let as_dual = mode.renders_dual(dual);
    let window = if as_dual {
        &segments[..6]
    } else {
        &segments[..]
    };

    let zeroes = longest_zero_run(window);
    let hex_part = if options.compressed && zeroes.len > 1 {
        format!(
            "{}::{}",
            join_segments(&window[..zeroes.start], options),
            join_segments(&window[zeroes.start + zeroes.len..], options)
        )
    } else {
        join_segments(window, options)
    };

    if !as_dual {
        return hex_part;
    }

    let tail = render_ipv4(value as u32);
    if hex_part.ends_with("::") {
        format!("{hex_part}{tail}")
    } else {
        format!("{hex_part}:{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_ipv6;

    fn compressed(text: &str) -> String {
        let parsed = parse_ipv6(text).unwrap();
        format_ipv6(
            parsed.value,
            parsed.dual,
            RenderOptions::default(),
            DualMode::ValueDependent,
        )
    }

    fn exploded(text: &str, uppercase: bool) -> String {
        let parsed = parse_ipv6(text).unwrap();
        let options = RenderOptions {
            compressed: false,
            uppercase,
        };
        format_ipv6(parsed.value, parsed.dual, options, DualMode::ValueDependent)
    }

    #[test]
    fn test_compression() {
        assert_eq!(compressed("2001:0db8:0000:0000:0000:0000:0000:0001"), "2001:db8::1");
        assert_eq!(compressed("0:0:0:0:0:0:0:1"), "::1");
        assert_eq!(compressed("1:0:0:0:0:0:0:0"), "1::");
        assert_eq!(compressed("0:0:0:0:0:0:0:0"), "::");
        assert_eq!(compressed("1:2:3:4:5:6:7:8"), "1:2:3:4:5:6:7:8");
    }

    #[test]
    fn test_single_zero_not_compressed() {
        assert_eq!(compressed("1:0:2:3:4:5:6:7"), "1:0:2:3:4:5:6:7");
        assert_eq!(compressed("1:2:3:4:5:6:7::"), "1:2:3:4:5:6:7:0");
    }

    #[test]
    fn test_leftmost_longest_tie() {
        assert_eq!(compressed("1:0:0:2:0:0:3:4"), "1::2:0:0:3:4");
        assert_eq!(compressed("1:0:0:2:0:0:0:4"), "1:0:0:2::4");
    }

    #[test]
    fn test_dual_value_dependent() {
        assert_eq!(compressed("::ffff:192.0.2.1"), "::ffff:192.0.2.1");
        assert_eq!(compressed("::192.0.2.1"), "::192.0.2.1");
        assert_eq!(compressed("1:2:3:4:5:6:10.0.0.1"), "1:2:3:4:5:6:10.0.0.1");
    }

    #[test]
    fn test_dual_modes() {
        let parsed = parse_ipv6("::ffff:192.0.2.1").unwrap();
        let options = RenderOptions::default();
        assert_eq!(
            format_ipv6(parsed.value, parsed.dual, options, DualMode::ForceNormal),
            "::ffff:c000:201"
        );
        let plain = parse_ipv6("2001:db8::1").unwrap();
        assert_eq!(
            format_ipv6(plain.value, plain.dual, options, DualMode::ForceDual),
            "2001:db8::0.0.0.1"
        );
    }

    #[test]
    fn test_exploded() {
        assert_eq!(
            exploded("2001:db8::1", false),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(
            exploded("2001:DB8::ab", true),
            "2001:0DB8:0000:0000:0000:0000:0000:00AB"
        );
        assert_eq!(
            exploded("::ffff:192.0.2.1", false),
            "0000:0000:0000:0000:0000:ffff:192.0.2.1"
        );
    }

    #[test]
    fn test_uppercase_compressed() {
        let parsed = parse_ipv6("2001:db8:abcd::ef").unwrap();
        let options = RenderOptions {
            compressed: true,
            uppercase: true,
        };
        assert_eq!(
            format_ipv6(parsed.value, parsed.dual, options, DualMode::ValueDependent),
            "2001:DB8:ABCD::EF"
        );
    }
}
