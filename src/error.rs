//! Error type shared by the address model and the enumerators.

use thiserror::Error;

/// The two families of failure a caller has to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed address or mask text.
    Format,
    /// A numeric value outside its permitted range.
    Range,
}

/// Error returned by parsing, construction and enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    /// Input does not look like `d.d.d.d` or `d.d.d.d/p`.
    #[error("Invalid IP-Address '{0}'")]
    InvalidFormat(String),

    /// One octet of the address is above 255.
    #[error("IP-Address is invalid at Octet {index}: '{value}'")]
    InvalidOctet {
        /// 0-based position, most significant first
        index: usize,
        /// The offending digits
        value: String,
    },

    /// Subnet mask text is not four dotted octets.
    #[error("Invalid subnet mask '{0}'")]
    InvalidMask(String),

    /// A zero bit is followed by a one bit.
    #[error("Invalid mask {0:#010x}: bits are not contiguous")]
    NonContiguousMask(u32),

    /// Raw address does not fit in 32 bits.
    #[error("Address {0} needs more than 4 octets")]
    AddressOutOfRange(u64),

    /// Prefix length outside `0..=32`.
    #[error("Invalid CIDR /{0}")]
    PrefixOutOfRange(u64),

    /// Prefix digits too long to hold as a number.
    #[error("Invalid CIDR /{0}")]
    OversizedPrefix(String),

    /// Enumeration target must be more specific than the block and at most 32.
    #[error("Subnet prefix /{target} must be in ({current}, 32]")]
    TargetPrefixOutOfRange {
        /// Requested sub-block prefix
        target: u8,
        /// Prefix of the block being split
        current: u8,
    },

    /// Page size of zero.
    #[error("Page size must be greater than zero")]
    InvalidPageSize,
}

impl CidrError {
    /// Which of the two error families this belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CidrError::InvalidFormat(_)
            | CidrError::InvalidOctet { .. }
            | CidrError::InvalidMask(_)
            | CidrError::NonContiguousMask(_) => ErrorKind::Format,
            CidrError::AddressOutOfRange(_)
            | CidrError::PrefixOutOfRange(_)
            | CidrError::OversizedPrefix(_)
            | CidrError::TargetPrefixOutOfRange { .. }
            | CidrError::InvalidPageSize => ErrorKind::Range,
        }
    }
}
