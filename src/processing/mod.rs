//! Derived views of an address.
//!
//! This module contains the logic layered on top of the value model:
//! - [`classify`] - Private/loopback/multicast/class/routing classification
//! - [`subnets`] - Paged partition of a block into sub-blocks
//! - [`hosts`] - Paged and lazy enumeration of usable hosts

mod classify;
mod hosts;
mod paging;
mod subnets;

// Re-export public types and functions
pub use classify::{AddressTypes, LegacyClass, RoutingRole};
pub use hosts::{HostEnumerator, Hosts};
pub use paging::Paged;
pub use subnets::{subnet_sizes, SubnetEnumerator, SubnetSize};
