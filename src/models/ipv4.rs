//! IPv4 address and CIDR notation.
//!
//! Provides the [`Ipv4`] value type (a 32-bit address paired with a prefix
//! length) together with the mask conversions it is built on. Every
//! derivation returns a new value; nothing here mutates in place.

use crate::error::CidrError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref RE_ADDR: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)(?:/([0-9]+))?$")
            .expect("Invalid Regex?");
    static ref RE_MASK: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid Regex?");
}

/// Mask bits for a prefix already known to be in `0..=32`.
pub(crate) fn mask_bits(len: u8) -> u32 {
    match len {
        0 => 0,
        // A shift by the full width would overflow.
        MAX_LENGTH => u32::MAX,
        n => ((1u32 << n) - 1) << (MAX_LENGTH - n),
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_explorer::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixOutOfRange(len.into()))
    } else {
        Ok(mask_bits(len))
    }
}

/// Convert a subnet mask to its prefix length.
///
/// Fails if any one bit follows a zero bit.
///
/// # Examples
/// ```
/// use ipv4_subnet_explorer::models::mask_to_prefix;
/// assert_eq!(mask_to_prefix(0xFFFFF000).unwrap(), 20);
/// assert!(mask_to_prefix(0xFF00FF00).is_err());
/// ```
pub fn mask_to_prefix(mask: u32) -> Result<u8, CidrError> {
    let prefix = mask.leading_ones();
    let rest = mask.checked_shl(prefix).unwrap_or(0);
    if rest != 0 {
        return Err(CidrError::NonContiguousMask(mask));
    }
    // leading_ones() of a u32 is at most 32
    Ok(prefix as u8)
}

/// Convert a dotted-decimal subnet mask (e.g. "255.255.255.0") to a prefix length.
pub fn parse_mask(mask: &str) -> Result<u8, CidrError> {
    let mask = mask.trim();
    let caps = RE_MASK
        .captures(mask)
        .ok_or_else(|| CidrError::InvalidMask(mask.to_string()))?;
    let bits = fold_octets(caps.iter().skip(1).flatten().map(|m| m.as_str()))
        .map_err(|_| CidrError::InvalidMask(mask.to_string()))?;
    mask_to_prefix(bits)
}

/// Prefix implied by the legacy address class of `addr`.
///
/// Class A, B and C map to 8, 16 and 24. Class D and E are treated as host routes.
pub fn legacy_prefix(addr: u32) -> u8 {
    match addr >> 29 {
        0b000..=0b011 => 8,
        0b100 | 0b101 => 16,
        0b110 => 24,
        _ => MAX_LENGTH,
    }
}

/// Pack four decimal octet strings into an address.
///
/// On failure returns the 0-based index and text of the first bad octet.
fn fold_octets<'a>(groups: impl Iterator<Item = &'a str>) -> Result<u32, (usize, &'a str)> {
    groups.enumerate().try_fold(0u32, |acc, (index, digits)| {
        digits
            .parse::<u8>()
            .map(|octet| (acc << 8) | u32::from(octet))
            .map_err(|_| (index, digits))
    })
}

fn parse_prefix(digits: &str) -> Result<u8, CidrError> {
    let value = digits
        .parse::<u64>()
        .map_err(|_| CidrError::OversizedPrefix(digits.to_string()))?;
    u8::try_from(value)
        .ok()
        .filter(|p| *p <= MAX_LENGTH)
        .ok_or(CidrError::PrefixOutOfRange(value))
}

/// IPv4 address with CIDR prefix length.
///
/// Immutable: use [`Ipv4::with_prefix`] to get a copy with a different prefix.
/// Ordering is by address, then prefix.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: u32,
    prefix: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`].
    ///
    /// Without a prefix the legacy class default from [`legacy_prefix`] is used.
    pub fn new(addr: u32, prefix: Option<u8>) -> Result<Ipv4, CidrError> {
        let prefix = prefix.unwrap_or_else(|| legacy_prefix(addr));
        if prefix > MAX_LENGTH {
            return Err(CidrError::PrefixOutOfRange(prefix.into()));
        }
        Ok(Ipv4 { addr, prefix })
    }

    /// Create a new [`Ipv4`] from a wider integer, rejecting anything above 32 bits.
    pub fn from_u64(addr: u64, prefix: Option<u8>) -> Result<Ipv4, CidrError> {
        let addr = u32::try_from(addr).map_err(|_| CidrError::AddressOutOfRange(addr))?;
        Ipv4::new(addr, prefix)
    }

    /// Build from parts that are already known to be valid.
    pub(crate) fn from_parts(addr: u32, prefix: u8) -> Ipv4 {
        debug_assert!(prefix <= MAX_LENGTH, "prefix /{prefix} out of range");
        Ipv4 { addr, prefix }
    }

    /// Parse `O.O.O.O` or `O.O.O.O/P`.
    ///
    /// An inline `/P` wins. Otherwise `mask` (dotted decimal) is converted to a
    /// prefix, and without either the legacy class default applies.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_explorer::models::Ipv4;
    /// let ip = Ipv4::parse("10.1.2.3", Some("255.255.0.0")).unwrap();
    /// assert_eq!(ip.prefix(), 16);
    /// ```
    pub fn parse(text: &str, mask: Option<&str>) -> Result<Ipv4, CidrError> {
        let text = text.trim();
        log::debug!("parse({text}, mask={mask:?})");

        let caps = RE_ADDR
            .captures(text)
            .ok_or_else(|| CidrError::InvalidFormat(text.to_string()))?;

        let addr = fold_octets((1..=4).filter_map(|i| caps.get(i)).map(|m| m.as_str()))
            .map_err(|(index, value)| CidrError::InvalidOctet {
                index,
                value: value.to_string(),
            })?;

        let prefix = match (caps.get(5), mask) {
            (Some(p), _) => Some(parse_prefix(p.as_str())?),
            (None, Some(mask)) => Some(parse_mask(mask)?),
            (None, None) => None,
        };

        Ipv4::new(addr, prefix)
    }

    /// The address as a plain integer.
    pub fn addr(&self) -> u32 {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The address as a standard library [`Ipv4Addr`].
    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.addr)
    }

    /// A copy of this address with another prefix length.
    pub fn with_prefix(&self, prefix: u8) -> Result<Ipv4, CidrError> {
        Ipv4::new(self.addr, Some(prefix))
    }

    /// The four octets, most significant first.
    pub fn to_octets(&self) -> [u8; 4] {
        let mut octets = [0u8; 4];
        let mut bits = self.addr;
        for octet in octets.iter_mut().rev() {
            *octet = (bits & 0xFF) as u8;
            bits >>= 8;
        }
        octets
    }

    /// Render as dotted decimal.
    ///
    /// `Some(true)` always appends `/prefix`, `Some(false)` never does. With
    /// `None` the suffix is shown for every prefix except 0.
    pub fn format(&self, show_prefix: Option<bool>) -> String {
        let address = self.to_octets().iter().join(".");
        if show_prefix.unwrap_or(self.prefix != 0) {
            format!("{address}/{prefix}", prefix = self.prefix)
        } else {
            address
        }
    }
}

impl FromStr for Ipv4 {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::parse(s, None)
    }
}

impl From<Ipv4> for Ipv4Addr {
    fn from(ip: Ipv4) -> Ipv4Addr {
        ip.ip()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.format(None))
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.format(Some(true)))
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::parse(&s, None).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
