//! Usable host addresses of a block.
//!
//! The sequence starts at the block's network address, not at the address the
//! block was built from: `192.168.1.77/29` lists `192.168.1.73` to
//! `192.168.1.78`. Network and broadcast are skipped unless the block is
//! point-to-point or a single /32.

use super::paging::Paged;
use crate::models::{Ipv4, MAX_LENGTH};
use std::iter::FusedIterator;

/// Index-addressable view of the usable hosts in a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEnumerator {
    first: u32,
    count: u64,
    prefix: u8,
}

impl HostEnumerator {
    /// Hosts of the block containing `block`; host bits of the address are ignored.
    pub fn new(block: Ipv4) -> HostEnumerator {
        let network = block.network_address().addr();
        let reserved = !(block.is_point_to_point() || block.prefix() == MAX_LENGTH);
        HostEnumerator {
            first: network + u32::from(reserved),
            count: block.host_count(),
            prefix: block.prefix(),
        }
    }

    /// A fresh traversal from the first usable host.
    pub fn iter(&self) -> Hosts {
        Hosts {
            hosts: *self,
            front: 0,
            back: self.count,
        }
    }
}

impl Paged for HostEnumerator {
    fn count(&self) -> u64 {
        self.count
    }

    fn get(&self, index: u64) -> Option<Ipv4> {
        if index >= self.count {
            return None;
        }
        u32::try_from(u64::from(self.first) + index)
            .ok()
            .map(|addr| Ipv4::from_parts(addr, self.prefix))
    }
}

impl IntoIterator for HostEnumerator {
    type Item = Ipv4;
    type IntoIter = Hosts;

    fn into_iter(self) -> Hosts {
        self.iter()
    }
}

/// Lazy iterator over host addresses; nothing past the last pulled item is computed.
#[derive(Debug, Clone)]
pub struct Hosts {
    hosts: HostEnumerator,
    front: u64,
    back: u64,
}

impl Iterator for Hosts {
    type Item = Ipv4;

    fn next(&mut self) -> Option<Ipv4> {
        if self.front >= self.back {
            return None;
        }
        let item = self.hosts.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Ipv4> {
        self.front = self.front.saturating_add(n as u64).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Hosts {
    fn next_back(&mut self) -> Option<Ipv4> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.hosts.get(self.back)
    }
}

impl FusedIterator for Hosts {}

impl Ipv4 {
    /// Usable hosts of this block.
    pub fn hosts(&self) -> HostEnumerator {
        HostEnumerator::new(*self)
    }
}
