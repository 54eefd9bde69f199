//! CSV report of an address, its sub-blocks and its hosts.

use super::terminal::{colored_binary, colored_ip, format_field};
use crate::error::CidrError;
use crate::models::Ipv4;
use crate::processing::{subnet_sizes, Paged, SubnetEnumerator};

/// Label/value pairs describing one address.
///
/// Network and broadcast are omitted for point-to-point blocks, the mask for /32.
pub fn summary_rows(ip: &Ipv4) -> Vec<(&'static str, String)> {
    let types = ip.address_types();
    let mut rows = vec![
        ("address", ip.format(Some(true))),
        ("binary", ip.to_binary()),
    ];
    if !types.is_p2p {
        rows.push(("network", ip.network_address().to_string()));
        rows.push(("broadcast", ip.broadcast_address().to_string()));
    }
    if ip.prefix() <= 31 {
        rows.push(("subnet_mask", ip.subnet_mask().format(Some(false))));
    }
    rows.extend([
        ("hosts", ip.host_count().to_string()),
        ("class", types.legacy_class.to_string()),
        ("private", types.is_private.to_string()),
        ("loopback", types.is_loopback.to_string()),
        ("multicast", types.is_multicast.to_string()),
        ("routing", types.routing_schema),
    ]);
    rows
}

/// One CSV line for a sub-block: 1-based position, CIDR, host count.
pub fn subnet_row(position: u64, subnet: &Ipv4) -> String {
    format!(
        "{cnt},{cidr},{hosts}",
        cnt = format_field(position, 12),
        cidr = format_field(subnet.format(Some(true)), 20),
        hosts = format_field(subnet.host_count(), 12),
    )
}

/// One CSV line for a host address.
pub fn host_row(position: u64, host: &Ipv4) -> String {
    format!(
        "{cnt},{addr}",
        cnt = format_field(position, 12),
        addr = format_field(host.format(Some(false)), 17),
    )
}

/// Trailing `# page N of M` line; `page` is 0-based.
pub fn page_footer(page: u64, total_pages: u64) -> String {
    if page >= total_pages {
        log::warn!("Page {page} is past the last page ({total_pages})");
    }
    format!("# page {} of {total_pages}", page.saturating_add(1))
}

/// Print the address summary, optionally coloured.
pub fn print_summary(ip: &Ipv4, color: bool) {
    log::info!("#Start print_summary() for {ip}");
    println!(r#"     "field",                "value""#);
    for (label, value) in summary_rows(ip) {
        let value = match (color, label) {
            (true, "address") => colored_ip(ip),
            (true, "binary") => colored_binary(ip),
            _ => value,
        };
        println!("{},{}", format_field(label, 12), format_field(value, 22));
    }
    println!();
    println!(r#""prefix","subnets","hosts_per_subnet""#);
    for size in subnet_sizes(ip) {
        println!(
            "{},{},{}",
            format_field(format!("/{}", size.prefix), 8),
            format_field(size.subnet_count, 12),
            format_field(size.hosts_per_subnet, 12)
        );
    }
}

/// Print one page of `/target` sub-blocks.
pub fn print_subnet_page(
    ip: &Ipv4,
    target: u8,
    page: u64,
    page_size: u64,
) -> Result<(), CidrError> {
    let subnets = SubnetEnumerator::new(*ip, target)?;
    let total_pages = subnets.total_pages(page_size)?;
    log::info!(
        "#Start print_subnet_page() /{target} page {page}/{total_pages} of {} subnets",
        subnets.count()
    );
    println!(r#"       "cnt",         "subnet_cidr",       "hosts""#);
    let start = page.saturating_mul(page_size);
    for (i, subnet) in subnets.page(page, page_size)?.iter().enumerate() {
        println!("{}", subnet_row(start + i as u64 + 1, subnet));
    }
    println!("{}", page_footer(page, total_pages));
    Ok(())
}

/// Print one page of usable hosts.
pub fn print_host_page(ip: &Ipv4, page: u64, page_size: u64) -> Result<(), CidrError> {
    let hosts = ip.hosts();
    let total_pages = hosts.total_pages(page_size)?;
    log::info!(
        "#Start print_host_page() page {page}/{total_pages} of {} hosts",
        hosts.count()
    );
    println!(r#"       "cnt",          "host""#);
    let start = page.saturating_mul(page_size);
    for (i, host) in hosts.page(page, page_size)?.iter().enumerate() {
        println!("{}", host_row(start + i as u64 + 1, host));
    }
    println!("{}", page_footer(page, total_pages));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(rows: &'a [(&'static str, String)], label: &str) -> Option<&'a str> {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_summary_rows() {
        let ip = Ipv4::parse("192.168.1.1/24", None).unwrap();
        let rows = summary_rows(&ip);
        assert_eq!(value(&rows, "address"), Some("192.168.1.1/24"));
        assert_eq!(value(&rows, "network"), Some("192.168.1.0/24"));
        assert_eq!(value(&rows, "broadcast"), Some("192.168.1.255/24"));
        assert_eq!(value(&rows, "subnet_mask"), Some("255.255.255.0"));
        assert_eq!(value(&rows, "hosts"), Some("254"));
        assert_eq!(value(&rows, "class"), Some("C"));
        assert_eq!(value(&rows, "private"), Some("true"));
        assert_eq!(value(&rows, "routing"), Some("Unicast"));
    }

    #[test]
    fn test_summary_rows_point_to_point() {
        let ip = Ipv4::parse("10.0.0.1/31", None).unwrap();
        let rows = summary_rows(&ip);
        assert_eq!(value(&rows, "network"), None);
        assert_eq!(value(&rows, "broadcast"), None);
        assert_eq!(value(&rows, "subnet_mask"), Some("255.255.255.254"));

        let host = Ipv4::parse("10.0.0.1/32", None).unwrap();
        assert_eq!(value(&summary_rows(&host), "subnet_mask"), None);
    }

    #[test]
    fn test_subnet_row() {
        let subnet = Ipv4::parse("10.64.0.0/10", None).unwrap();
        assert_eq!(
            subnet_row(2, &subnet),
            r#"         "2",      "10.64.0.0/10",   "4194302""#
        );
    }

    #[test]
    fn test_page_footer() {
        assert_eq!(page_footer(0, 4), "# page 1 of 4");
        assert_eq!(page_footer(u64::MAX, 4), format!("# page {} of 4", u64::MAX));
    }

    #[test]
    fn test_print_page_past_end() {
        let ip = Ipv4::parse("10.0.0.0/24", None).unwrap();
        assert!(print_host_page(&ip, u64::MAX, 8).is_ok());
        assert!(print_subnet_page(&ip, 28, u64::MAX, 8).is_ok());
        assert!(print_host_page(&ip, 0, 0).is_err());
    }

    #[test]
    fn test_host_row() {
        let host = Ipv4::parse("10.0.0.1/8", None).unwrap();
        assert_eq!(host_row(1, &host), r#"         "1",       "10.0.0.1""#);
    }
}
