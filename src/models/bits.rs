//! Bit-level views of an address split at the prefix boundary.

use super::ipv4::Ipv4;
use serde::Serialize;

/// Where an octet sits relative to the prefix boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OctetRole {
    /// All eight bits are network bits.
    Network,
    /// The prefix boundary falls inside this octet.
    Subnet,
    /// All eight bits are host bits.
    Host,
}

/// One octet as binary digits, split into network and host parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OctetBits {
    pub network: String,
    pub host: String,
}

impl OctetBits {
    pub fn role(&self) -> OctetRole {
        match (self.network.is_empty(), self.host.is_empty()) {
            (_, true) => OctetRole::Network,
            (true, false) => OctetRole::Host,
            (false, false) => OctetRole::Subnet,
        }
    }
}

impl std::fmt::Display for OctetBits {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.network, self.host)
    }
}

impl Ipv4 {
    /// Number of network bits in octet `index` (0-8).
    fn network_bits_in(&self, index: usize) -> usize {
        let remaining = usize::from(self.prefix()).saturating_sub(index * 8);
        remaining.min(8)
    }

    /// Role of each octet, most significant first.
    pub fn octet_roles(&self) -> [OctetRole; 4] {
        std::array::from_fn(|i| match self.network_bits_in(i) {
            8 => OctetRole::Network,
            0 => OctetRole::Host,
            _ => OctetRole::Subnet,
        })
    }

    /// Each octet in binary, split at the prefix boundary.
    pub fn octet_bits(&self) -> [OctetBits; 4] {
        let octets = self.to_octets();
        std::array::from_fn(|i| {
            let binary = format!("{:08b}", octets[i]);
            let (network, host) = binary.split_at(self.network_bits_in(i));
            OctetBits {
                network: network.to_string(),
                host: host.to_string(),
            }
        })
    }

    /// Dotted binary form, e.g. `11000000.10101000.00000001.00000001`.
    pub fn to_binary(&self) -> String {
        self.octet_bits()
            .iter()
            .map(|bits| bits.to_string())
            .collect::<Vec<String>>()
            .join(".")
    }
}
