//! Bitstring codec primitives.
//!
//! Converts byte sequences to literal binary-digit strings and partitions
//! entropy+checksum bitstreams into the 11-digit groups that index the
//! word list. All downstream encoding builds on these two operations.

use crate::MnemonicError;

/// Number of binary digits in one word-index group.
pub const GROUP_BITS: usize = 11;

/// Valid lengths for an entropy+checksum bitstream, in binary digits.
///
/// Each is entropy_bits + entropy_bits/32 for an approved strength, and
/// each is a multiple of 11.
const BITSTREAM_LENGTHS: [usize; 5] = [132, 165, 198, 231, 264];

/// Render a byte slice as a binary-digit string.
///
/// Each byte becomes exactly 8 digits, most-significant bit first,
/// concatenated in input order. Total function: the empty slice yields
/// the empty string.
///
/// # Arguments
/// * `data` - Byte slice to render.
///
/// # Returns
/// A string of `8 * data.len()` characters, each '0' or '1'.
pub fn to_bits(data: &[u8]) -> String {
    let mut bits = String::with_capacity(data.len() * 8);
    for &byte in data {
        for shift in (0..8).rev() {
            bits.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    bits
}

/// Partition a bitstream into consecutive 11-character groups.
///
/// The input length (in characters) must be one of {132, 165, 198, 231,
/// 264}, which guarantees an exact split with no remainder. Group order
/// follows input order. The characters themselves are not inspected here;
/// non-binary content is rejected when the groups are parsed.
///
/// # Arguments
/// * `bits` - The entropy+checksum bitstream.
///
/// # Returns
/// The groups as borrowed substrings, or `InvalidBitstreamLength` if the
/// input length is not in the approved set.
pub fn split_groups(bits: &str) -> Result<Vec<&str>, MnemonicError> {
    let total = bits.chars().count();
    if !BITSTREAM_LENGTHS.contains(&total) {
        return Err(MnemonicError::InvalidBitstreamLength { got: total });
    }

    let mut groups = Vec::with_capacity(total / GROUP_BITS);
    let mut rest = bits;
    while !rest.is_empty() {
        // Split on character boundaries so a malformed stream surfaces as
        // a parse error downstream rather than a panic here.
        let cut = rest
            .char_indices()
            .nth(GROUP_BITS)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (group, tail) = rest.split_at(cut);
        groups.push(group);
        rest = tail;
    }
    Ok(groups)
}
