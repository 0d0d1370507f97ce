//! Bech32 encoding and decoding.
//!
//! A Bech32 string is `hrp + "1" + data + checksum`, where the data and the
//! six checksum symbols are 5-bit values written with [`CHARSET`]. This is the
//! BIP-173 checksum (constant `1`, not Bech32m), as used by segwit v0 and
//! Cosmos-style account addresses.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use crate::bits::{convert_bits, BitsError};

/// The 32-character data alphabet; a symbol's value is its index here.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup for [`CHARSET`], indexed by ASCII code. Both cases map.
pub const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

/// BCH generator coefficients for the checksum.
pub const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Separator between the human-readable prefix and the data part.
pub const SEPARATOR: char = '1';

/// Number of checksum symbols appended to the data.
pub const CHECKSUM_LENGTH: usize = 6;

/// Shortest accepted Bech32 string.
pub const MIN_LENGTH: usize = 8;

/// Longest accepted Bech32 string.
pub const MAX_LENGTH: usize = 90;

/// Bech32 encoding and decoding errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bech32Error {
    /// String length outside `MIN_LENGTH..=MAX_LENGTH`
    InvalidLength(usize),
    /// Byte outside the printable ASCII range 33..=126
    InvalidCharacter(u8),
    /// Both upper and lower case letters present
    MixedCase,
    /// No `1` separator
    MissingSeparator,
    /// Separator leaves an empty prefix or too short a data part
    InvalidSeparatorPosition(usize),
    /// Human-readable prefix byte outside 33..=126
    InvalidHrpCharacter(u8),
    /// Data character not in the Bech32 alphabet
    InvalidDataCharacter(char),
    /// Checksum does not verify
    ChecksumMismatch,
    /// Empty human-readable prefix
    EmptyHrp,
    /// Data symbol does not fit in 5 bits
    InvalidSymbol(u8),
    /// Payload could not be regrouped
    Regroup(BitsError),
}

impl core::fmt::Display for Bech32Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Bech32Error::InvalidLength(l) => {
                write!(f, "Invalid length: {} (expected {}..={})", l, MIN_LENGTH, MAX_LENGTH)
            }
            Bech32Error::InvalidCharacter(b) => write!(f, "Invalid character: {:#04x}", b),
            Bech32Error::MixedCase => write!(f, "Mixed case"),
            Bech32Error::MissingSeparator => write!(f, "No separator found"),
            Bech32Error::InvalidSeparatorPosition(p) => write!(f, "Invalid separator position: {}", p),
            Bech32Error::InvalidHrpCharacter(b) => write!(f, "Invalid HRP character: {:#04x}", b),
            Bech32Error::InvalidDataCharacter(c) => write!(f, "Invalid data character: {:?}", c),
            Bech32Error::ChecksumMismatch => write!(f, "Invalid checksum"),
            Bech32Error::EmptyHrp => write!(f, "Empty HRP"),
            Bech32Error::InvalidSymbol(s) => write!(f, "Invalid 5-bit symbol: {}", s),
            Bech32Error::Regroup(e) => write!(f, "Invalid payload: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Bech32Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Bech32Error::Regroup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BitsError> for Bech32Error {
    fn from(e: BitsError) -> Self {
        Bech32Error::Regroup(e)
    }
}

/// Expand the prefix for checksum input: the high 3 bits of every byte, a
/// zero, then the low 5 bits of every byte.
pub fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() * 2 + 1);

    result.extend(bytes.iter().map(|b| b >> 5));
    result.push(0);
    result.extend(bytes.iter().map(|b| b & 31));

    result
}

/// BCH polynomial residue over a sequence of 5-bit values.
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;

    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ (value as u32);
        for (i, &g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }

    chk
}

/// Compute the six checksum symbols for `hrp` and `data`.
///
/// `hrp` is taken as-is; callers encoding an uppercase prefix must pass its
/// lowercase form.
pub fn checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);

    let residue = polymod(&values) ^ 1;

    let mut result = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in result.iter_mut().enumerate() {
        *symbol = ((residue >> (5 * (5 - i))) & 31) as u8;
    }
    result
}

/// Check that `data` (payload followed by checksum) verifies under `hrp`.
pub fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == 1
}

/// Encode a prefix and 5-bit symbols into a Bech32 string.
///
/// The checksum is always computed over the lowercase prefix. An uppercase
/// prefix produces an all-uppercase string. Data longer than the decoder's
/// `MAX_LENGTH` limit still encodes but will not decode.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Bech32Error> {
    check_hrp(hrp)?;

    if let Some(&symbol) = data.iter().find(|&&s| s >= 32) {
        return Err(Bech32Error::InvalidSymbol(symbol));
    }

    let uppercase = hrp.bytes().any(|b| b.is_ascii_uppercase());
    let hrp = hrp.to_ascii_lowercase();
    let checksum = checksum(&hrp, data);

    let mut result = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    result.push_str(&hrp);
    result.push(SEPARATOR);
    for &symbol in data.iter().chain(checksum.iter()) {
        result.push(CHARSET[symbol as usize] as char);
    }

    if uppercase {
        result.make_ascii_uppercase();
    }

    tracing::trace!(hrp = %hrp, len = result.len(), "encoded bech32 string");
    Ok(result)
}

/// Regroup bytes into 5-bit symbols (with padding) and encode them.
pub fn encode_bytes(hrp: &str, bytes: &[u8]) -> Result<String, Bech32Error> {
    let symbols = convert_bits(bytes, 8, 5, true)?;
    encode(hrp, &symbols)
}

/// Decode and validate a Bech32 string.
///
/// Returns the lowercase prefix and every data symbol, including the six
/// trailing checksum symbols.
pub fn decode(input: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    parse(input).map_err(|e| {
        tracing::debug!(error = %e, len = input.len(), "rejected bech32 string");
        e
    })
}

/// Decode a Bech32 string and regroup its payload back into bytes.
///
/// The checksum symbols are dropped and the remaining symbols regrouped
/// without padding, so a non-zero or overlong tail is rejected.
pub fn decode_bytes(input: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    let (hrp, mut data) = decode(input)?;
    data.truncate(data.len() - CHECKSUM_LENGTH);
    let bytes = convert_bits(&data, 5, 8, false)?;
    Ok((hrp, bytes))
}

fn parse(input: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    let bytes = input.as_bytes();

    if bytes.len() < MIN_LENGTH || bytes.len() > MAX_LENGTH {
        return Err(Bech32Error::InvalidLength(bytes.len()));
    }

    if let Some(&b) = bytes.iter().find(|&&b| !is_printable(b)) {
        return Err(Bech32Error::InvalidCharacter(b));
    }

    let has_lower = bytes.iter().any(|b| b.is_ascii_lowercase());
    let has_upper = bytes.iter().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }

    let lower = input.to_ascii_lowercase();

    // The prefix may itself contain '1', so split on the last one.
    let pos = lower.rfind(SEPARATOR).ok_or(Bech32Error::MissingSeparator)?;
    if pos < 1 || pos + CHECKSUM_LENGTH + 1 > lower.len() {
        return Err(Bech32Error::InvalidSeparatorPosition(pos));
    }

    let hrp = &lower[..pos];
    if let Some(&b) = hrp.as_bytes().iter().find(|&&b| !is_printable(b)) {
        return Err(Bech32Error::InvalidHrpCharacter(b));
    }

    let mut data = Vec::with_capacity(lower.len() - pos - 1);
    for &b in &lower.as_bytes()[pos + 1..] {
        let value = CHARSET_REV[b as usize];
        if value < 0 {
            return Err(Bech32Error::InvalidDataCharacter(b as char));
        }
        data.push(value as u8);
    }

    if !verify_checksum(hrp, &data) {
        return Err(Bech32Error::ChecksumMismatch);
    }

    Ok((hrp.to_string(), data))
}

fn check_hrp(hrp: &str) -> Result<(), Bech32Error> {
    if hrp.is_empty() {
        return Err(Bech32Error::EmptyHrp);
    }
    if let Some(&b) = hrp.as_bytes().iter().find(|&&b| !is_printable(b)) {
        return Err(Bech32Error::InvalidHrpCharacter(b));
    }
    let has_lower = hrp.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hrp.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }
    Ok(())
}

#[inline]
fn is_printable(b: u8) -> bool {
    (33..=126).contains(&b)
}
