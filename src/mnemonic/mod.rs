//! Mnemonic encoding: checksum, word indices, and dictionary resolution.
//!
//! Implements the BIP-39 encoding pipeline. Entropy is extended with a
//! SHA-256 checksum (entropy_bits/32 bits), the combined stream is cut
//! into 11-bit groups, and each group indexes the word list. The
//! production path computes indices by bit-shifting directly over the
//! bytes; the textual bitstream operations are kept as the string-level
//! contract and serve as the oracle for the direct path in tests.

use sha2::{Digest, Sha256};

use crate::bits::{to_bits, GROUP_BITS};
use crate::entropy::{generate_entropy, Strength};
use crate::wordlist::Wordlist;
use crate::MnemonicError;

/// Append the checksum to entropy and render the combined bitstream.
///
/// Computes SHA-256 over the entropy, renders entropy and digest as
/// binary-digit strings, and concatenates the entropy string with the
/// first entropy_bits/32 digest digits. The checksum length is tied to
/// the entropy length exactly so the result divides evenly by 11; the
/// output length is always one of {132, 165, 198, 231, 264}.
///
/// # Arguments
/// * `entropy` - 16, 20, 24, 28, or 32 bytes of entropy.
///
/// # Returns
/// The entropy+checksum bitstream, or `InvalidEntropyLength`.
pub fn checksummed_bits(entropy: &[u8]) -> Result<String, MnemonicError> {
    let strength = Strength::from_byte_len(entropy.len())?;
    let digest = Sha256::digest(entropy);

    let mut stream = to_bits(entropy);
    let digest_bits = to_bits(digest.as_slice());
    stream.push_str(&digest_bits[..strength.checksum_bits()]);
    Ok(stream)
}

/// Compute the word indices for an entropy value.
///
/// Equivalent to splitting [`checksummed_bits`] into 11-digit groups and
/// parsing each as a big-endian binary number, but works by shifting the
/// bytes through an accumulator with no textual intermediate. The
/// checksum never exceeds 8 bits, so entropy plus the first digest byte
/// carries every group; the surplus low bits of that byte stay below one
/// group and are discarded.
///
/// # Arguments
/// * `entropy` - 16, 20, 24, 28, or 32 bytes of entropy.
///
/// # Returns
/// One index in [0, 2048) per mnemonic word, or `InvalidEntropyLength`.
pub fn word_indices(entropy: &[u8]) -> Result<Vec<u16>, MnemonicError> {
    let strength = Strength::from_byte_len(entropy.len())?;
    let digest = Sha256::digest(entropy);

    let mut indices = Vec::with_capacity(strength.word_count());
    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    for &byte in entropy.iter().chain(digest.first()) {
        acc = (acc << 8) | u32::from(byte);
        acc_bits += 8;
        while acc_bits >= GROUP_BITS {
            acc_bits -= GROUP_BITS;
            indices.push(((acc >> acc_bits) & 0x7ff) as u16);
        }
    }
    Ok(indices)
}

/// Resolve 11-digit binary groups to dictionary words.
///
/// Each group must be a plain base-2 literal of exactly 11 digits; signs,
/// other characters, and other lengths fail with `InvalidIndexFormat`
/// naming the offending group. Word order follows group order. An index
/// past the end of the list means the dictionary invariant was broken
/// and reports `CorruptDictionary`.
///
/// # Arguments
/// * `groups` - The 11-digit groups, e.g. from `bits::split_groups`.
/// * `wordlist` - The dictionary to resolve against.
///
/// # Returns
/// The resolved words in group order, or an error.
pub fn resolve(groups: &[&str], wordlist: &Wordlist) -> Result<Vec<String>, MnemonicError> {
    let mut indices = Vec::with_capacity(groups.len());
    for group in groups {
        indices.push(parse_group(group)?);
    }
    lookup_words(&indices, wordlist)
}

/// Encode entropy as a mnemonic word sequence.
///
/// Runs the full checksum-and-index pipeline and resolves every index
/// against the supplied dictionary.
///
/// # Arguments
/// * `entropy` - 16, 20, 24, 28, or 32 bytes of entropy.
/// * `wordlist` - The dictionary to resolve against.
///
/// # Returns
/// 12, 15, 18, 21, or 24 words, or an error.
pub fn mnemonic_from_entropy(
    entropy: &[u8],
    wordlist: &Wordlist,
) -> Result<Vec<String>, MnemonicError> {
    let indices = word_indices(entropy)?;
    lookup_words(&indices, wordlist)
}

/// Generate a fresh mnemonic at the requested strength.
///
/// Draws entropy from the operating-system CSPRNG and encodes it against
/// the supplied dictionary in one step.
///
/// # Arguments
/// * `strength_bits` - One of 128, 160, 192, 224, 256.
/// * `wordlist` - The dictionary to resolve against.
///
/// # Returns
/// The mnemonic words, or an error.
pub fn generate_mnemonic(
    strength_bits: usize,
    wordlist: &Wordlist,
) -> Result<Vec<String>, MnemonicError> {
    let entropy = generate_entropy(strength_bits)?;
    mnemonic_from_entropy(&entropy, wordlist)
}

/// Parse one 11-digit base-2 group to its index.
///
/// Stricter than `u16::from_str_radix`, which tolerates a leading sign.
fn parse_group(group: &str) -> Result<u16, MnemonicError> {
    let digits = group.as_bytes();
    if digits.len() != GROUP_BITS {
        return Err(MnemonicError::InvalidIndexFormat(group.to_string()));
    }
    let mut index = 0u16;
    for &digit in digits {
        index = (index << 1)
            | match digit {
                b'0' => 0,
                b'1' => 1,
                _ => return Err(MnemonicError::InvalidIndexFormat(group.to_string())),
            };
    }
    Ok(index)
}

/// Map indices to owned words, preserving order.
fn lookup_words(indices: &[u16], wordlist: &Wordlist) -> Result<Vec<String>, MnemonicError> {
    indices
        .iter()
        .map(|&index| {
            wordlist.word(index).map(str::to_string).ok_or_else(|| {
                MnemonicError::CorruptDictionary(format!("no word at index {}", index))
            })
        })
        .collect()
}
