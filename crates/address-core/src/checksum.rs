//! Mixed-case checksum encoding for hex addresses (EIP-55).
//!
//! The letter case of each hex digit carries one checksum bit: digit `i` is
//! uppercased when nibble `i` of `keccak256(lowercase_hex)` is 8 or more.

use alloc::string::String;
use crate::hash::keccak256;

/// Number of hex digits in a 20-byte address.
pub const HEX_ADDRESS_LENGTH: usize = 40;

/// Checksum formatting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumError {
    /// Not exactly 40 hex digits after the prefix
    InvalidLength(usize),
    /// Non-hex character
    InvalidHexCharacter(char),
}

impl core::fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChecksumError::InvalidLength(l) => {
                write!(f, "Invalid hex address length: {} (expected {})", l, HEX_ADDRESS_LENGTH)
            }
            ChecksumError::InvalidHexCharacter(c) => write!(f, "Invalid hex character: {:?}", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChecksumError {}

/// Format a hex address with its mixed-case checksum.
///
/// The input may be in any case and may carry a `0x` prefix. The result is
/// always `0x`-prefixed.
pub fn to_checksum_address(addr: &str) -> Result<String, ChecksumError> {
    let lower = addr.to_ascii_lowercase();
    let digits = lower.strip_prefix("0x").unwrap_or(&lower);

    if digits.len() != HEX_ADDRESS_LENGTH {
        return Err(ChecksumError::InvalidLength(digits.len()));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ChecksumError::InvalidHexCharacter(c));
    }

    Ok(apply_checksum(digits))
}

/// Format raw address bytes with their mixed-case checksum.
pub fn checksum_encode(bytes: &[u8; 20]) -> String {
    apply_checksum(&hex::encode(bytes))
}

/// `digits` must be 40 lowercase hex digits.
fn apply_checksum(digits: &str) -> String {
    let hash = keccak256(digits.as_bytes());

    let mut result = String::with_capacity(2 + HEX_ADDRESS_LENGTH);
    result.push_str("0x");

    for (i, c) in digits.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if nibble >= 8 {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
    }

    result
}
