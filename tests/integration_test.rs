//! Integration tests for ipv4-subnet-explorer
//!
//! These tests exercise the public API end to end: parse, derive, classify, enumerate.

use ipv4_subnet_explorer::models::{
    get_cidr_mask, mask_to_prefix, parse_mask, reference, MAX_LENGTH,
};
use ipv4_subnet_explorer::{
    CidrError, ErrorKind, Ipv4, LegacyClass, Paged, Report, SubnetEnumerator,
};
use std::collections::HashSet;

fn ip(s: &str) -> Ipv4 {
    Ipv4::parse(s, None).expect("Failed to parse test address")
}

#[test]
fn test_parse_and_format() {
    let ip = ip("192.168.1.1/24");
    assert_eq!(ip.to_octets(), [192, 168, 1, 1]);
    assert_eq!(ip.prefix(), 24);
    assert_eq!(ip.format(None), "192.168.1.1/24");
}

#[test]
fn test_default_prefix_class_a() {
    let ip = ip("10.0.0.5");
    assert_eq!(ip.prefix(), 8);
    assert_eq!(ip.legacy_class(), LegacyClass::A);
    assert!(ip.is_private());
}

#[test]
fn test_block_of_256() {
    let block = ip("192.168.1.0/24");
    assert_eq!(block.network_address().format(Some(false)), "192.168.1.0");
    assert_eq!(block.broadcast_address().format(Some(false)), "192.168.1.255");
    assert_eq!(block.host_count(), 254);
}

#[test]
fn test_point_to_point_block() {
    let block = ip("192.168.1.0/30");
    assert_eq!(block.host_count(), 4);
    assert!(block.is_point_to_point());
}

#[test]
fn test_first_subnet_page() {
    let page = SubnetEnumerator::new(ip("10.0.0.0/8"), 10)
        .unwrap()
        .page(0, 2)
        .unwrap();
    let page: Vec<String> = page.iter().map(|s| s.to_string()).collect();
    assert_eq!(page, vec!["10.0.0.0/10", "10.64.0.0/10"]);
}

#[test]
fn test_multicast() {
    let ip = ip("224.0.0.5");
    assert!(ip.is_multicast());
    assert_eq!(ip.routing_schema(), "Multicast");
}

#[test]
fn test_round_trip_every_prefix() {
    let addrs = [0u32, 1, 0x0A000001, 0x7F000001, 0xAC100505, 0xC0A80101, 0xE0000005, u32::MAX];
    for addr in addrs {
        for prefix in 0..=MAX_LENGTH {
            let x = Ipv4::new(addr, Some(prefix)).unwrap();
            assert_eq!(Ipv4::parse(&x.format(Some(true)), None).unwrap(), x);
        }
    }
}

#[test]
fn test_mask_round_trip() {
    for n in 0..=MAX_LENGTH {
        assert_eq!(mask_to_prefix(get_cidr_mask(n).unwrap()).unwrap(), n);
    }
}

#[test]
fn test_non_contiguous_masks() {
    for mask in ["255.0.255.0", "255.255.255.1", "0.255.255.255", "254.255.0.0"] {
        let err = parse_mask(mask).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format, "mask {mask}");
        assert!(matches!(err, CidrError::NonContiguousMask(_)));
    }
}

#[test]
fn test_count_relation_all_prefixes() {
    for prefix in 0..MAX_LENGTH {
        let block = Ipv4::new(0xC0A80000, Some(prefix)).unwrap();
        let expected = if block.is_point_to_point() {
            block.host_count()
        } else {
            block.host_count() + 2
        };
        assert_eq!(block.address_count(), expected, "prefix /{prefix}");
    }
}

#[test]
fn test_containment() {
    let blocks = [
        ip("0.0.0.0/0"),
        ip("10.0.0.0/8"),
        ip("10.1.0.0/16"),
        ip("10.1.2.0/24"),
        ip("10.1.2.3/32"),
        ip("192.168.0.0/16"),
    ];
    for x in &blocks {
        assert!(x.includes(x), "{x} should include itself");
        for y in &blocks {
            if x.includes(y) {
                assert!(x.prefix() <= y.prefix(), "{x} includes {y}");
            }
        }
    }
    assert!(blocks[1].includes(&blocks[4]));
    assert!(!blocks[5].includes(&blocks[3]));
}

#[test]
fn test_subnet_pages_partition_once() {
    let base = ip("10.20.0.0/16");
    for target in [17u8, 20, 23] {
        let subnets = SubnetEnumerator::new(base, target).unwrap();
        let page_size = 5;
        let all: Vec<Ipv4> = (0..subnets.total_pages(page_size).unwrap())
            .flat_map(|page| subnets.page(page, page_size).unwrap())
            .collect();
        assert_eq!(all.len() as u64, 1u64 << (target - base.prefix()));
        let unique: HashSet<Ipv4> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert!(all.iter().all(|s| base.with_prefix(16).unwrap().includes(s)));
    }
}

#[test]
fn test_enumerator_errors() {
    let base = ip("10.0.0.0/8");
    for target in [0u8, 8, 33] {
        let err = SubnetEnumerator::new(base, target).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}

#[test]
fn test_hosts_large_block_is_lazy() {
    let hosts = ip("0.0.0.0/0").hosts();
    let first: Vec<String> = hosts.iter().take(2).map(|h| h.format(Some(false))).collect();
    assert_eq!(first, vec!["0.0.0.1", "0.0.0.2"]);
    let page = hosts.page(hosts.total_pages(1000).unwrap() - 1, 1000).unwrap();
    assert_eq!(
        page.last().map(|h| h.format(Some(false))),
        Some("255.255.255.254".to_string())
    );
}

#[test]
fn test_concurrent_enumeration() {
    reference::initialize();
    let subnets = SubnetEnumerator::new(ip("172.16.0.0/12"), 24).unwrap();
    let handles: Vec<_> = (0..4u64)
        .map(|page| std::thread::spawn(move || (page, subnets.page(page, 16).unwrap())))
        .collect();
    for handle in handles {
        let (page, result) = handle.join().unwrap();
        assert_eq!(result.len(), 16);
        assert_eq!(result[0], subnets.get(page * 16).unwrap());
        assert!(result.iter().all(|s| s.is_private()));
    }
}

#[test]
fn test_report_json() {
    let report = Report::new(&ip("192.168.1.1/24"));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["address"], "192.168.1.1/24");
    assert_eq!(json["networkAddress"], "192.168.1.0/24");
    assert_eq!(json["hostCount"], 254);
    assert_eq!(json["addressTypes"]["legacyClass"], "C");
    assert_eq!(json["subnets"].as_array().map(|a| a.len()), Some(8));
}
