//! Block arithmetic: masks, network and broadcast addresses, sizes and containment.

use super::ipv4::{mask_bits, Ipv4, MAX_LENGTH};

impl Ipv4 {
    /// The subnet mask as an address carrying the same prefix.
    pub fn subnet_mask(&self) -> Ipv4 {
        Ipv4::from_parts(mask_bits(self.prefix()), self.prefix())
    }

    /// The address with all host bits cleared.
    pub fn network_address(&self) -> Ipv4 {
        Ipv4::from_parts(self.addr() & mask_bits(self.prefix()), self.prefix())
    }

    /// The address with all host bits set.
    pub fn broadcast_address(&self) -> Ipv4 {
        Ipv4::from_parts(!mask_bits(self.prefix()) | self.addr(), self.prefix())
    }

    /// Number of addresses in the block, `2^(32 - prefix)`.
    pub fn address_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix())
    }

    /// Number of usable host addresses.
    ///
    /// Point-to-point blocks (/30, /31) use every address and a /32 is a
    /// single host; everything else loses the network and broadcast address.
    pub fn host_count(&self) -> u64 {
        match self.prefix() {
            30 | 31 => self.address_count(),
            MAX_LENGTH => 1,
            _ => self.address_count() - 2,
        }
    }

    /// True for /30 and /31 blocks.
    pub fn is_point_to_point(&self) -> bool {
        matches!(self.prefix(), 30 | 31)
    }

    /// True if `other` lies inside this block and is no less specific.
    pub fn includes(&self, other: &Ipv4) -> bool {
        if self.prefix() > other.prefix() {
            return false;
        }
        (self.addr() ^ other.addr()) & mask_bits(self.prefix()) == 0
    }
}
