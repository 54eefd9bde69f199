//! Well-known reference networks used by the classifier.
//!
//! Built once through the regular parser. Call [`initialize`] at start-up so
//! they are fully constructed before any thread reads them.

use super::ipv4::Ipv4;
use lazy_static::lazy_static;

fn reference(cidr: &str) -> Ipv4 {
    Ipv4::parse(cidr, None).unwrap_or_else(|e| panic!("Invalid reference network {cidr}: {e}"))
}

lazy_static! {
    pub static ref PRIVATE_A: Ipv4 = reference("10.0.0.0/8");
    pub static ref PRIVATE_B: Ipv4 = reference("172.16.0.0/12");
    pub static ref PRIVATE_C: Ipv4 = reference("192.168.0.0/16");
    pub static ref MULTICAST: Ipv4 = reference("224.0.0.0/4");
    pub static ref LOOPBACK: Ipv4 = reference("127.0.0.0/8");
}

/// Force construction of every reference network.
pub fn initialize() {
    lazy_static::initialize(&PRIVATE_A);
    lazy_static::initialize(&PRIVATE_B);
    lazy_static::initialize(&PRIVATE_C);
    lazy_static::initialize(&MULTICAST);
    lazy_static::initialize(&LOOPBACK);
    log::debug!("Reference networks initialized");
}

/// The three RFC 1918 private blocks.
pub fn private_networks() -> [Ipv4; 3] {
    [*PRIVATE_A, *PRIVATE_B, *PRIVATE_C]
}
