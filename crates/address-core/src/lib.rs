//! Address codecs for blockchain account addresses.
//!
//! This crate provides pure Rust implementations of:
//! - Bit regrouping between 8-bit bytes and 5-bit symbols
//! - Bech32 encoding and decoding (BIP-173 checksum)
//! - Mixed-case checksummed hex addresses (EIP-55)
//! - Hex address validation against the accepted spellings
//! - Cosmos-style Bech32 account addresses from compressed public keys

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod bech32;
pub mod bits;
pub mod chain;
pub mod checksum;
pub mod derive;
pub mod hash;

pub use address::{is_valid_address, AddressError, ChecksumMode, HexAddress};
pub use bech32::{decode, decode_bytes, encode, encode_bytes, Bech32Error};
pub use bits::{convert_bits, BitsError};
pub use chain::Chain;
pub use checksum::{checksum_encode, to_checksum_address, ChecksumError};
pub use derive::{account_address, account_id, DeriveError};
