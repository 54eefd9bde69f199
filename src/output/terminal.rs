//! Terminal output utilities.
//!
//! Field formatting plus network/host colouring of addresses.

use crate::models::{Ipv4, OctetRole, MAX_LENGTH};
use colored::{ColoredString, Colorize};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

fn paint(text: &str, role: OctetRole) -> ColoredString {
    match role {
        OctetRole::Network => text.green(),
        OctetRole::Subnet => text.yellow(),
        OctetRole::Host => text.cyan(),
    }
}

/// Dotted decimal with each octet coloured by its role.
///
/// The `/prefix` suffix is left off for /32.
pub fn colored_ip(ip: &Ipv4) -> String {
    let octets = ip.to_octets();
    let mut out = ip
        .octet_roles()
        .iter()
        .zip(octets)
        .map(|(role, octet)| paint(&octet.to_string(), *role).to_string())
        .collect::<Vec<String>>()
        .join(".");
    if ip.prefix() < MAX_LENGTH {
        out.push_str(&format!("/{}", ip.prefix().to_string().green()));
    }
    out
}

/// Dotted binary with network bits and host bits in different colours.
pub fn colored_binary(ip: &Ipv4) -> String {
    ip.octet_bits()
        .iter()
        .map(|bits| {
            format!(
                "{}{}",
                paint(&bits.network, OctetRole::Network),
                paint(&bits.host, OctetRole::Host)
            )
        })
        .collect::<Vec<String>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_colored_ip_plain() {
        colored::control::set_override(false);
        let ip = Ipv4::parse("172.16.5.4/20", None).unwrap();
        assert_eq!(colored_ip(&ip), "172.16.5.4/20");
        let host = Ipv4::parse("172.16.5.4/32", None).unwrap();
        assert_eq!(colored_ip(&host), "172.16.5.4");
        assert_eq!(colored_binary(&ip), ip.to_binary());
    }
}
