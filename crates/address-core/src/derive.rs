//! Cosmos-style account addresses.
//!
//! The account id of a compressed secp256k1 public key is
//! `RIPEMD160(SHA256(key))`; the address is that id regrouped into 5-bit
//! symbols and Bech32-encoded under the chain's prefix. Key compression
//! itself happens upstream.

use alloc::string::String;
use crate::bech32::{encode_bytes, Bech32Error};
use crate::chain::Chain;
use crate::hash::hash160;

/// Size of a compressed secp256k1 public key.
pub const COMPRESSED_KEY_LENGTH: usize = 33;

/// Address derivation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// The chain does not use Bech32 addresses
    NoBech32Prefix(Chain),
    /// Public key is not a 33-byte compressed key
    InvalidPublicKeyLength(usize),
    /// Bech32 encoding failed
    Encoding(Bech32Error),
}

impl core::fmt::Display for DeriveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeriveError::NoBech32Prefix(chain) => {
                write!(f, "Chain {} has no Bech32 prefix", chain)
            }
            DeriveError::InvalidPublicKeyLength(l) => write!(
                f,
                "Invalid compressed public key length: {} (expected {})",
                l, COMPRESSED_KEY_LENGTH
            ),
            DeriveError::Encoding(e) => write!(f, "Encoding failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeriveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeriveError::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Bech32Error> for DeriveError {
    fn from(e: Bech32Error) -> Self {
        DeriveError::Encoding(e)
    }
}

/// The 20-byte account id of a compressed public key.
pub fn account_id(compressed_pubkey: &[u8]) -> Result<[u8; 20], DeriveError> {
    if compressed_pubkey.len() != COMPRESSED_KEY_LENGTH {
        return Err(DeriveError::InvalidPublicKeyLength(compressed_pubkey.len()));
    }
    Ok(hash160(compressed_pubkey))
}

/// Bech32 account address of a compressed public key under `hrp`.
pub fn account_address_with_hrp(hrp: &str, compressed_pubkey: &[u8]) -> Result<String, DeriveError> {
    let id = account_id(compressed_pubkey)?;
    Ok(encode_bytes(hrp, &id)?)
}

/// Bech32 account address of a compressed public key on `chain`.
pub fn account_address(chain: Chain, compressed_pubkey: &[u8]) -> Result<String, DeriveError> {
    let hrp = chain.bech32_hrp().ok_or(DeriveError::NoBech32Prefix(chain))?;
    account_address_with_hrp(hrp, compressed_pubkey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bech32::decode_bytes;

    const PUBKEY: &str = "03f349dec2b5205707c778534a7f134125ea31e82134e5aa987417f1091103e263";

    fn pubkey() -> alloc::vec::Vec<u8> {
        hex::decode(PUBKEY).unwrap()
    }

    #[test]
    fn test_htdf_address() {
        let address = account_address(Chain::Htdf, &pubkey()).unwrap();
        assert_eq!(address, "htdf1sqxddufe9qz0phxnntsgytg3wr8sl9z46edt9h");
    }

    #[test]
    fn test_usdp_and_het_addresses() {
        assert_eq!(
            account_address(Chain::Usdp, &pubkey()).unwrap(),
            "usdp1sqxddufe9qz0phxnntsgytg3wr8sl9z4e7mvuc"
        );
        assert_eq!(
            account_address(Chain::Het, &pubkey()).unwrap(),
            "0x1sqxddufe9qz0phxnntsgytg3wr8sl9z4yzpmql"
        );
    }

    #[test]
    fn test_payload_roundtrip() {
        let address = account_address(Chain::Htdf, &pubkey()).unwrap();
        assert!(address.starts_with("htdf1"));

        let (hrp, bytes) = decode_bytes(&address).unwrap();
        assert_eq!(hrp, "htdf");
        assert_eq!(bytes, account_id(&pubkey()).unwrap().to_vec());
    }

    #[test]
    fn test_eth_has_no_prefix() {
        assert_eq!(
            account_address(Chain::Eth, &pubkey()),
            Err(DeriveError::NoBech32Prefix(Chain::Eth))
        );
    }

    #[test]
    fn test_uncompressed_key_rejected() {
        assert_eq!(account_id(&[0x04; 65]), Err(DeriveError::InvalidPublicKeyLength(65)));
    }
}
