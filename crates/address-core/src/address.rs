//! 20-byte account addresses and hex-string validation.
//!
//! A hex address string is accepted when, after the `0x` prefix, it is:
//! - all lowercase,
//! - all uppercase, or
//! - exactly the mixed-case checksummed form (see [`crate::checksum`]).
//!
//! [`ChecksumMode::Ignore`] skips the case check and only requires 20 bytes.

use alloc::string::String;
use crate::checksum::checksum_encode;

/// Size of an address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Address validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// String does not start with `0x`
    MissingHexPrefix,
    /// Not valid hex
    InvalidHex,
    /// Decoded to the wrong number of bytes
    WrongByteLength(usize),
    /// Letter case matches none of lowercase, uppercase or checksummed
    ChecksumMismatch,
}

impl core::fmt::Display for AddressError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AddressError::MissingHexPrefix => write!(f, "Missing 0x prefix"),
            AddressError::InvalidHex => write!(f, "Invalid hex encoding"),
            AddressError::WrongByteLength(l) => {
                write!(f, "Invalid address length: {} bytes (expected {})", l, ADDRESS_LENGTH)
            }
            AddressError::ChecksumMismatch => write!(f, "Invalid address checksum"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressError {}

/// Whether [`HexAddress::parse`] checks the letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumMode {
    /// Accept lowercase, uppercase or the exact checksummed form
    #[default]
    Enforce,
    /// Accept any casing
    Ignore,
}

/// A 20-byte account address.
///
/// Equality and hashing are by bytes, so every accepted spelling of the same
/// address compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HexAddress([u8; ADDRESS_LENGTH]);

impl HexAddress {
    /// Wrap 20 raw bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        HexAddress(bytes)
    }

    /// Copy from a slice that must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let array: [u8; ADDRESS_LENGTH] = bytes
            .try_into()
            .map_err(|_| AddressError::WrongByteLength(bytes.len()))?;
        Ok(HexAddress(array))
    }

    /// Parse a `0x`-prefixed hex address.
    pub fn parse(address: &str, mode: ChecksumMode) -> Result<Self, AddressError> {
        Self::parse_hex(address, mode).map_err(|e| {
            tracing::debug!(error = %e, "rejected hex address");
            e
        })
    }

    fn parse_hex(address: &str, mode: ChecksumMode) -> Result<Self, AddressError> {
        let digits = address.strip_prefix("0x").ok_or(AddressError::MissingHexPrefix)?;
        let bytes = hex::decode(digits).map_err(|_| AddressError::InvalidHex)?;
        let parsed = Self::from_slice(&bytes)?;

        if mode == ChecksumMode::Ignore {
            return Ok(parsed);
        }

        let lower = parsed.to_lower_hex();
        if digits == &lower[2..] || digits == &parsed.to_upper_hex()[2..] {
            return Ok(parsed);
        }
        if address == parsed.to_checksum() {
            return Ok(parsed);
        }

        Err(AddressError::ChecksumMismatch)
    }

    /// The raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_lower_hex(&self) -> String {
        let mut result = String::with_capacity(2 + 2 * ADDRESS_LENGTH);
        result.push_str("0x");
        result.push_str(&hex::encode(self.0));
        result
    }

    /// `0x`-prefixed uppercase hex digits.
    pub fn to_upper_hex(&self) -> String {
        let mut result = String::with_capacity(2 + 2 * ADDRESS_LENGTH);
        result.push_str("0x");
        result.push_str(&hex::encode_upper(self.0));
        result
    }

    /// `0x`-prefixed mixed-case checksummed hex.
    pub fn to_checksum(&self) -> String {
        checksum_encode(&self.0)
    }
}

impl core::fmt::Display for HexAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl core::str::FromStr for HexAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexAddress::parse(s, ChecksumMode::Enforce)
    }
}

impl AsRef<[u8]> for HexAddress {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LENGTH]> for HexAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        HexAddress(bytes)
    }
}

/// Whether `address` is an acceptable spelling of some 20-byte address.
pub fn is_valid_address(address: &str) -> bool {
    HexAddress::parse(address, ChecksumMode::Enforce).is_ok()
}
