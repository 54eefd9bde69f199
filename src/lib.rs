//! IPv4 address and CIDR block semantics.
//!
//! Parsing and formatting of addresses, network/broadcast/mask derivation,
//! classification, and paged enumeration of the sub-blocks and hosts inside
//! a block. Everything in [`models`] and [`processing`] is pure and free of I/O.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, ErrorKind};
pub use models::Ipv4;
pub use processing::{AddressTypes, HostEnumerator, LegacyClass, Paged, SubnetEnumerator};

/// Classification and sub-block table for one address, as emitted by `--json`.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The address as given, with its prefix
    pub address: Ipv4,
    /// Host bits cleared
    pub network_address: Ipv4,
    /// Host bits set
    pub broadcast_address: Ipv4,
    pub subnet_mask: Ipv4,
    /// Usable hosts in the block
    pub host_count: u64,
    pub address_types: AddressTypes,
    /// Sub-block count and size for every longer prefix
    pub subnets: Vec<processing::SubnetSize>,
}

impl Report {
    /// Build the report for `ip`.
    pub fn new(ip: &Ipv4) -> Report {
        Report {
            address: *ip,
            network_address: ip.network_address(),
            broadcast_address: ip.broadcast_address(),
            subnet_mask: ip.subnet_mask(),
            host_count: ip.host_count(),
            address_types: ip.address_types(),
            subnets: processing::subnet_sizes(ip),
        }
    }
}
