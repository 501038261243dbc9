//! BIP-39 mnemonic phrase generation and seed derivation.
//!
//! This crate implements the full BIP-39 pipeline:
//! - Entropy generation at the five approved strengths (128..256 bits)
//! - Checksum encoding (SHA-256, entropy_bits/32 checksum bits)
//! - 11-bit group indexing and word resolution against a 2048-word list
//! - PBKDF2-HMAC-SHA512 seed derivation (2048 rounds, 64-byte output)
//!
//! The canonical English word list ships embedded; custom lists can be
//! loaded from files or supplied directly for deterministic testing.

pub mod bits;
pub mod entropy;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

mod error;
pub use error::MnemonicError;

pub use entropy::{generate_entropy, Strength};
pub use mnemonic::{generate_mnemonic, mnemonic_from_entropy};
pub use seed::{seed_from_mnemonic, Seed};
pub use wordlist::Wordlist;
