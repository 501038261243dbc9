//! Entropy generation at the approved BIP-39 strengths.
//!
//! Provides the `Strength` enum, the validated form of the five approved
//! entropy sizes, and `generate_entropy`, which fills a fresh buffer from
//! the operating-system CSPRNG.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::MnemonicError;

/// An approved entropy strength.
///
/// BIP-39 permits exactly five strengths: 128, 160, 192, 224, and 256
/// bits. Carrying the strength as an enum makes unapproved values
/// unrepresentable once validation has run, so downstream arithmetic
/// (checksum bits, word count) cannot go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// 128 bits of entropy, 12 words.
    Bits128,
    /// 160 bits of entropy, 15 words.
    Bits160,
    /// 192 bits of entropy, 18 words.
    Bits192,
    /// 224 bits of entropy, 21 words.
    Bits224,
    /// 256 bits of entropy, 24 words.
    Bits256,
}

impl Strength {
    /// All approved strengths, in ascending order.
    pub const ALL: [Strength; 5] = [
        Strength::Bits128,
        Strength::Bits160,
        Strength::Bits192,
        Strength::Bits224,
        Strength::Bits256,
    ];

    /// Validate a strength given in bits.
    ///
    /// # Arguments
    /// * `bits` - Requested entropy size in bits.
    ///
    /// # Returns
    /// The matching `Strength`, or `InvalidStrength` if `bits` is not one
    /// of 128, 160, 192, 224, 256.
    pub fn from_bits(bits: usize) -> Result<Self, MnemonicError> {
        match bits {
            128 => Ok(Strength::Bits128),
            160 => Ok(Strength::Bits160),
            192 => Ok(Strength::Bits192),
            224 => Ok(Strength::Bits224),
            256 => Ok(Strength::Bits256),
            got => Err(MnemonicError::InvalidStrength { got }),
        }
    }

    /// Validate an entropy buffer length given in bytes.
    ///
    /// # Arguments
    /// * `len` - Entropy length in bytes.
    ///
    /// # Returns
    /// The matching `Strength`, or `InvalidEntropyLength` if `len` is not
    /// one of 16, 20, 24, 28, 32.
    pub fn from_byte_len(len: usize) -> Result<Self, MnemonicError> {
        match len {
            16 => Ok(Strength::Bits128),
            20 => Ok(Strength::Bits160),
            24 => Ok(Strength::Bits192),
            28 => Ok(Strength::Bits224),
            32 => Ok(Strength::Bits256),
            got => Err(MnemonicError::InvalidEntropyLength { got }),
        }
    }

    /// Entropy size in bits.
    pub fn bits(self) -> usize {
        match self {
            Strength::Bits128 => 128,
            Strength::Bits160 => 160,
            Strength::Bits192 => 192,
            Strength::Bits224 => 224,
            Strength::Bits256 => 256,
        }
    }

    /// Entropy size in bytes.
    pub fn byte_len(self) -> usize {
        self.bits() / 8
    }

    /// Checksum length in bits (entropy bits / 32).
    pub fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    /// Combined entropy+checksum bitstream length.
    ///
    /// Always a multiple of 11.
    pub fn total_bits(self) -> usize {
        self.bits() + self.checksum_bits()
    }

    /// Number of mnemonic words encoded at this strength.
    pub fn word_count(self) -> usize {
        self.total_bits() / crate::bits::GROUP_BITS
    }
}

/// Generate fresh entropy of the requested strength.
///
/// Fills `strength_bits / 8` bytes from the operating-system CSPRNG. A
/// failing source is surfaced immediately as `RandomSourceFailure`; the
/// buffer is never returned partially filled, and the read is never
/// retried (a degraded randomness source is an environment problem the
/// caller must decide how to handle).
///
/// # Arguments
/// * `strength_bits` - One of 128, 160, 192, 224, 256.
///
/// # Returns
/// The entropy bytes, or `InvalidStrength` / `RandomSourceFailure`.
pub fn generate_entropy(strength_bits: usize) -> Result<Vec<u8>, MnemonicError> {
    let strength = Strength::from_bits(strength_bits)?;
    let mut entropy = vec![0u8; strength.byte_len()];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|e| MnemonicError::RandomSourceFailure(e.to_string()))?;
    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_table() {
        let expected = [
            (Strength::Bits128, 128, 16, 4, 132, 12),
            (Strength::Bits160, 160, 20, 5, 165, 15),
            (Strength::Bits192, 192, 24, 6, 198, 18),
            (Strength::Bits224, 224, 28, 7, 231, 21),
            (Strength::Bits256, 256, 32, 8, 264, 24),
        ];
        for (strength, bits, bytes, checksum, total, words) in expected {
            assert_eq!(strength.bits(), bits);
            assert_eq!(strength.byte_len(), bytes);
            assert_eq!(strength.checksum_bits(), checksum);
            assert_eq!(strength.total_bits(), total);
            assert_eq!(strength.word_count(), words);
            assert_eq!(strength.total_bits() % 11, 0);
            assert_eq!(Strength::from_bits(bits).unwrap(), strength);
            assert_eq!(Strength::from_byte_len(bytes).unwrap(), strength);
        }
    }

    #[test]
    fn test_from_bits_rejects_unapproved() {
        for bits in [0, 1, 64, 127, 129, 159, 255, 257, 512] {
            let err = Strength::from_bits(bits).unwrap_err();
            assert!(
                matches!(err, MnemonicError::InvalidStrength { got } if got == bits),
                "bits {} produced {:?}",
                bits,
                err
            );
        }
    }

    #[test]
    fn test_from_byte_len_rejects_unapproved() {
        for len in [0, 1, 15, 17, 31, 33, 64] {
            let err = Strength::from_byte_len(len).unwrap_err();
            assert!(
                matches!(err, MnemonicError::InvalidEntropyLength { got } if got == len),
                "len {} produced {:?}",
                len,
                err
            );
        }
    }

    #[test]
    fn test_generate_entropy_lengths() {
        for strength in Strength::ALL {
            let entropy = generate_entropy(strength.bits()).unwrap();
            assert_eq!(entropy.len(), strength.byte_len());
        }
    }

    #[test]
    fn test_generate_entropy_rejects_unapproved() {
        assert!(generate_entropy(0).is_err());
        assert!(generate_entropy(100).is_err());
        assert!(generate_entropy(2048).is_err());
    }

    #[test]
    fn test_generate_entropy_is_not_constant() {
        // Two independent draws colliding would require a broken source.
        let a = generate_entropy(256).unwrap();
        let b = generate_entropy(256).unwrap();
        assert_ne!(a, b);
    }
}
