//! Address value model.
//!
//! This module contains the core value type and the arithmetic on it:
//! - [`Ipv4`] - IPv4 address with CIDR prefix length
//! - block arithmetic (network, broadcast, counts, containment)
//! - bit-level octet views
//! - [`reference`] networks used for classification

mod bits;
mod block;
mod ipv4;
pub mod reference;

// Re-export public types
pub use bits::{OctetBits, OctetRole};
pub use ipv4::{get_cidr_mask, legacy_prefix, mask_to_prefix, parse_mask, Ipv4, MAX_LENGTH};
