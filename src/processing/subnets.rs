//! Splitting a block into equal sub-blocks.
//!
//! A block `base/prefix` split at `target` has `2^(target - prefix)`
//! sub-blocks of `2^(32 - target)` addresses each. Sub-block `i` starts at
//! `network(base) + i * block_size`, so any page is computed directly from
//! its index range.

use super::paging::Paged;
use crate::error::CidrError;
use crate::models::{Ipv4, MAX_LENGTH};
use serde::Serialize;

/// Index-addressable partition of a block into sub-blocks of one prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetEnumerator {
    network: u32,
    prefix: u8,
    target: u8,
}

impl SubnetEnumerator {
    /// Partition `base` into `/target` sub-blocks.
    ///
    /// `target` must be in `(base.prefix(), 32]`.
    pub fn new(base: Ipv4, target: u8) -> Result<SubnetEnumerator, CidrError> {
        if target <= base.prefix() || target > MAX_LENGTH {
            return Err(CidrError::TargetPrefixOutOfRange {
                target,
                current: base.prefix(),
            });
        }
        log::debug!("SubnetEnumerator::new({base}, /{target})");
        Ok(SubnetEnumerator {
            network: base.network_address().addr(),
            prefix: base.prefix(),
            target,
        })
    }

    /// Prefix of the generated sub-blocks.
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Addresses per sub-block.
    pub fn block_size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.target)
    }

    /// Lazy iterator over every sub-block in address order.
    pub fn iter(&self) -> impl Iterator<Item = Ipv4> {
        let subnets = *self;
        (0..subnets.count()).filter_map(move |index| subnets.get(index))
    }
}

impl Paged for SubnetEnumerator {
    fn count(&self) -> u64 {
        1u64 << (self.target - self.prefix)
    }

    fn get(&self, index: u64) -> Option<Ipv4> {
        if index >= self.count() {
            return None;
        }
        let addr = u64::from(self.network) + index * self.block_size();
        u32::try_from(addr)
            .ok()
            .map(|addr| Ipv4::from_parts(addr, self.target))
    }
}

/// Sub-block count and size for one target prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubnetSize {
    pub prefix: u8,
    pub subnet_count: u64,
    pub hosts_per_subnet: u64,
}

/// Sub-block counts for every prefix more specific than `base`.
pub fn subnet_sizes(base: &Ipv4) -> Vec<SubnetSize> {
    (base.prefix() + 1..=MAX_LENGTH)
        .map(|prefix| SubnetSize {
            prefix,
            subnet_count: 1u64 << (prefix - base.prefix()),
            hosts_per_subnet: Ipv4::from_parts(base.addr(), prefix).host_count(),
        })
        .collect()
}

impl Ipv4 {
    /// One page of the `/target` sub-blocks of this block.
    pub fn subnet_page(
        &self,
        target: u8,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<Ipv4>, CidrError> {
        SubnetEnumerator::new(*self, target)?.page(page, page_size)
    }

    /// Pages needed to list every `/target` sub-block.
    pub fn subnet_total_pages(&self, target: u8, page_size: u64) -> Result<u64, CidrError> {
        SubnetEnumerator::new(*self, target)?.total_pages(page_size)
    }
}
