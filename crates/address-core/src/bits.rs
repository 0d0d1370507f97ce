//! Bit regrouping between integer widths.
//!
//! Bech32 payloads are carried as 5-bit symbols while keys and hashes are
//! 8-bit bytes. [`convert_bits`] repacks one into the other, most significant
//! bits first.

use alloc::vec::Vec;

/// Bit regrouping errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    /// A width outside `1..=8` was requested.
    InvalidBitWidth { from_bits: u8, to_bits: u8 },
    /// Trailing bits are left over that the padding policy cannot account for.
    Overflow {
        /// Number of bits still held in the accumulator.
        leftover_bits: u8,
        /// The value of those bits.
        pending: u8,
    },
}

impl core::fmt::Display for BitsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitsError::InvalidBitWidth { from_bits, to_bits } => {
                write!(f, "Invalid bit widths: {} -> {}", from_bits, to_bits)
            }
            BitsError::Overflow { leftover_bits, pending } => write!(
                f,
                "Bit packing overflow: {} leftover bits with value {:#x}",
                leftover_bits, pending
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitsError {}

/// Regroup `data` from `from_bits`-wide values into `to_bits`-wide values.
///
/// Only the low `from_bits` bits of each input value are used. With `pad`
/// set, a trailing partial group is shifted left and emitted; without it
/// the trailing bits are dropped, provided there are at most 4 of them and
/// they are all zero. Anything else is reported as [`BitsError::Overflow`].
pub fn convert_bits(data: &[u8], from_bits: u8, to_bits: u8, pad: bool) -> Result<Vec<u8>, BitsError> {
    if !(1..=8).contains(&from_bits) || !(1..=8).contains(&to_bits) {
        return Err(BitsError::InvalidBitWidth { from_bits, to_bits });
    }

    let capacity = (data.len() * from_bits as usize + to_bits as usize - 1) / to_bits as usize;
    let mut regrouped = Vec::with_capacity(capacity);

    // Accumulator for the symbol being built and how many bits it holds.
    let mut next_value: u32 = 0;
    let mut filled_bits: u8 = 0;

    for &value in data {
        // Left-align the significant bits within a byte.
        let mut byte = ((value as u32) << (8 - from_bits)) & 0xff;
        let mut remaining = from_bits;

        while remaining > 0 {
            let take = remaining.min(to_bits - filled_bits);

            next_value = (next_value << take) | (byte >> (8 - take));
            byte = (byte << take) & 0xff;
            remaining -= take;
            filled_bits += take;

            if filled_bits == to_bits {
                regrouped.push(next_value as u8);
                next_value = 0;
                filled_bits = 0;
            }
        }
    }

    if pad && filled_bits > 0 {
        regrouped.push((next_value << (to_bits - filled_bits)) as u8);
        next_value = 0;
        filled_bits = 0;
    }

    if filled_bits > 0 && (filled_bits > 4 || next_value != 0) {
        return Err(BitsError::Overflow {
            leftover_bits: filled_bits,
            pending: next_value as u8,
        });
    }

    Ok(regrouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_single_byte_padded() {
        // 11111 111 -> 11111, 11100
        assert_eq!(convert_bits(&[0xff], 8, 5, true).unwrap(), vec![31, 28]);
    }

    #[test]
    fn test_zero_hash_padded() {
        let symbols = convert_bits(&[0u8; 20], 8, 5, true).unwrap();
        assert_eq!(symbols, vec![0u8; 32]);
    }

    #[test]
    fn test_exact_multiple_needs_no_padding() {
        // 5 bytes = 40 bits = 8 symbols exactly
        let data = [0x00, 0x44, 0x32, 0x14, 0xc7];
        let padded = convert_bits(&data, 8, 5, true).unwrap();
        let unpadded = convert_bits(&data, 8, 5, false).unwrap();
        assert_eq!(padded, unpadded);
        assert_eq!(padded.len(), 8);
        assert_eq!(padded, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_symbols_back_to_bytes() {
        let bytes = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        let symbols = convert_bits(&bytes, 8, 5, true).unwrap();
        assert_eq!(symbols.len(), 32);
        assert!(symbols.iter().all(|&s| s < 32));

        let restored = convert_bits(&symbols, 5, 8, false).unwrap();
        assert_eq!(restored, bytes);
    }

    #[test]
    fn test_unpadded_zero_tail_is_dropped() {
        // 11111 000: the three trailing zero bits are discarded
        assert_eq!(convert_bits(&[0xf8], 8, 5, false).unwrap(), vec![31]);
    }

    #[test]
    fn test_unpadded_nonzero_tail_overflows() {
        let result = convert_bits(&[0xff], 8, 5, false);
        assert_eq!(
            result,
            Err(BitsError::Overflow { leftover_bits: 3, pending: 0b111 })
        );
    }

    #[test]
    fn test_unpadded_long_tail_overflows() {
        // 33 symbols = 165 bits: 20 bytes plus 5 leftover bits
        let result = convert_bits(&[0u8; 33], 5, 8, false);
        assert!(matches!(result, Err(BitsError::Overflow { leftover_bits: 5, .. })));
    }

    #[test]
    fn test_high_bits_are_ignored() {
        // Only the low 5 bits of each value count
        assert_eq!(
            convert_bits(&[0xe1, 0x1f], 5, 8, true).unwrap(),
            convert_bits(&[0x01, 0x1f], 5, 8, true).unwrap()
        );
    }

    #[test]
    fn test_same_width_is_identity() {
        let data = [0x00, 0x7f, 0x80, 0xff];
        assert_eq!(convert_bits(&data, 8, 8, false).unwrap(), data.to_vec());
    }

    #[test]
    fn test_invalid_widths() {
        assert!(matches!(
            convert_bits(&[1], 0, 5, true),
            Err(BitsError::InvalidBitWidth { from_bits: 0, to_bits: 5 })
        ));
        assert!(matches!(
            convert_bits(&[1], 8, 9, true),
            Err(BitsError::InvalidBitWidth { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(convert_bits(&[], 8, 5, true).unwrap().is_empty());
        assert!(convert_bits(&[], 5, 8, false).unwrap().is_empty());
    }
}
