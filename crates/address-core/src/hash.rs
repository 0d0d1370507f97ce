//! Hash primitives used by address derivation and checksumming.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// RIPEMD-160 hash.
#[inline]
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let hash = Ripemd160::digest(data);
    let mut result = [0u8; 20];
    result.copy_from_slice(&hash);
    result
}

/// RIPEMD160(SHA256(data)), the account identifier of a public key.
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Keccak-256 (the pre-standard SHA-3 padding used by Ethereum).
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let hash = Keccak256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}
