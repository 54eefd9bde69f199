//! Semantic classification of an address.
//!
//! Private, loopback and multicast checks are containment tests against the
//! [`reference`](crate::models::reference) networks.

use crate::models::reference::{private_networks, LOOPBACK, MULTICAST};
use crate::models::{Ipv4, MAX_LENGTH};
use serde::Serialize;
use std::fmt;

/// Historical address class, decided by the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegacyClass {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for LegacyClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            LegacyClass::A => "A",
            LegacyClass::B => "B",
            LegacyClass::C => "C",
            LegacyClass::D => "D",
            LegacyClass::E => "E",
        };
        f.write_str(name)
    }
}

/// Base routing role, before the /30 suffix is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoutingRole {
    Multicast,
    Host,
    PointToPoint,
    Network,
    Broadcast,
    Unicast,
}

impl fmt::Display for RoutingRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RoutingRole::Multicast => "Multicast",
            RoutingRole::Host => "Host",
            RoutingRole::PointToPoint => "Point-to-Point",
            RoutingRole::Network => "Network",
            RoutingRole::Broadcast => "Broadcast",
            RoutingRole::Unicast => "Unicast",
        };
        f.write_str(name)
    }
}

/// Everything the classifier knows about one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressTypes {
    pub legacy_class: LegacyClass,
    pub is_private: bool,
    pub routing_schema: String,
    pub is_net_addr: bool,
    pub is_loopback: bool,
    #[serde(rename = "isP2P")]
    pub is_p2p: bool,
    pub is_multicast: bool,
}

impl Ipv4 {
    /// Inside 10/8, 172.16/12 or 192.168/16.
    pub fn is_private(&self) -> bool {
        private_networks().iter().any(|net| net.includes(self))
    }

    /// Inside 127/8.
    pub fn is_loopback(&self) -> bool {
        LOOPBACK.includes(self)
    }

    /// Inside 224/4.
    pub fn is_multicast(&self) -> bool {
        MULTICAST.includes(self)
    }

    /// Classful A-E from the first octet.
    pub fn legacy_class(&self) -> LegacyClass {
        match self.to_octets()[0] {
            0..=127 => LegacyClass::A,
            128..=191 => LegacyClass::B,
            192..=223 => LegacyClass::C,
            224..=239 => LegacyClass::D,
            _ => LegacyClass::E,
        }
    }

    /// All host bits are zero.
    pub fn is_network_address(&self) -> bool {
        self.addr() == self.network_address().addr()
    }

    /// The routing role, checked in order: multicast, /32, /31, network, broadcast.
    pub fn routing_role(&self) -> RoutingRole {
        if self.is_multicast() {
            RoutingRole::Multicast
        } else if self.prefix() == MAX_LENGTH {
            RoutingRole::Host
        } else if self.prefix() > 30 {
            RoutingRole::PointToPoint
        } else if self.is_network_address() {
            RoutingRole::Network
        } else if self.addr() == self.broadcast_address().addr() {
            RoutingRole::Broadcast
        } else {
            RoutingRole::Unicast
        }
    }

    /// Routing role label; a /30 additionally carries a ` Point-to-Point` suffix.
    pub fn routing_schema(&self) -> String {
        let role = self.routing_role().to_string();
        if self.prefix() == 30 {
            format!("{role} Point-to-Point")
        } else {
            role
        }
    }

    /// Bundle every classification into one record.
    pub fn address_types(&self) -> AddressTypes {
        AddressTypes {
            legacy_class: self.legacy_class(),
            is_private: self.is_private(),
            routing_schema: self.routing_schema(),
            is_net_addr: self.is_network_address(),
            is_loopback: self.is_loopback(),
            is_p2p: self.is_point_to_point(),
            is_multicast: self.is_multicast(),
        }
    }
}
