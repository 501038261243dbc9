//! Seed derivation from a mnemonic and password.
//!
//! Joins the mnemonic words, NFKD-normalizes both the joined phrase and
//! the salt string "mnemonic" + password, and stretches them through
//! PBKDF2-HMAC-SHA512 into a 64-byte seed. The derivation is a pure
//! function of its inputs; identical inputs always produce an identical
//! seed across implementations and languages.

use std::fmt;

use hmac::Hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;

/// Length of a derived seed in bytes.
pub const SEED_LENGTH: usize = 64;

/// PBKDF2 iteration count fixed by the derivation scheme.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// A 64-byte seed derived from a mnemonic and password.
///
/// Displays as lowercase hex. The bytes are overwritten with zeros when
/// the value is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    /// Wrap raw seed bytes.
    pub fn new(bytes: [u8; SEED_LENGTH]) -> Self {
        Seed(bytes)
    }

    /// Access the seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }

    /// Render the seed as lowercase hex (128 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.0.zeroize();
    }
}

/// Derive the 64-byte seed for a mnemonic and password.
///
/// The words are joined with single spaces; the joined phrase and the
/// literal string `"mnemonic" + password` are both NFKD-normalized; the
/// normalized phrase is then run through PBKDF2 with the normalized salt,
/// 2048 iterations, and HMAC-SHA512 as the PRF. The words are not
/// validated against any dictionary or checksum here, so seeds derive for
/// any phrase, matching the cross-implementation convention.
///
/// # Arguments
/// * `words` - The mnemonic words, in order.
/// * `password` - Optional passphrase; use `""` for none.
///
/// # Returns
/// The derived `Seed`.
pub fn seed_from_mnemonic<S: AsRef<str>>(words: &[S], password: &str) -> Seed {
    let phrase = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    let mnemonic: String = phrase.nfkd().collect();
    let salt: String = format!("mnemonic{}", password).nfkd().collect();

    let mut seed = [0u8; SEED_LENGTH];
    pbkdf2::pbkdf2::<Hmac<Sha512>>(
        mnemonic.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed,
    )
    .expect("HMAC accepts any key length");
    Seed::new(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::mnemonic_from_entropy;
    use crate::wordlist::Wordlist;

    const PHRASE_15: [&str; 15] = [
        "analyst", "latin", "claw", "cube", "pelican", "copy", "clap", "royal",
        "task", "elegant", "gravity", "during", "nut", "situate", "seat",
    ];

    // -- reference vectors --

    #[test]
    fn test_seed_without_password() {
        let seed = seed_from_mnemonic(&PHRASE_15, "");
        assert_eq!(
            seed.to_hex(),
            "70e8290d465c494b093076f51adb77f09b91334559e1abd32164c5536cb11a82\
             ead3a1af267ff9888f948f20618da4eb8f7dd2b7225e6bea549678db1ec51c42"
        );
    }

    #[test]
    fn test_seed_with_password() {
        let seed = seed_from_mnemonic(&PHRASE_15, "password");
        assert_eq!(
            seed.to_hex(),
            "b693da578716e078a3e533d62ec0b86528cb9edcfcb31dddd31943bde9eff841\
             a2c94edd502d4e705a6e701fd0c0da6390d564df8b8fc45e47d445ad80262493"
        );
    }

    #[test]
    fn test_published_seed_vectors() {
        // (entropy hex, expected seed hex) pairs from the reference
        // vector set for the English list, passphrase "TREZOR".
        let cases = [
            (
                "00000000000000000000000000000000",
                "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
                 1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04",
            ),
            (
                "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
                "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6f\
                 a457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607",
            ),
            (
                "80808080808080808080808080808080",
                "d71de856f81a8acc65e6fc851a38d4d7ec216fd0796d0a6827a3ad6ed5511a30\
                 fa280f12eb2e47ed2ac03b5c462a0358d18d69fe4f985ec81778c1b370b652a8",
            ),
            (
                "ffffffffffffffffffffffffffffffff",
                "ac27495480225222079d7be181583751e86f571027b0497b5b5d11218e0a8a13\
                 332572917f0f8e5a589620c6f15b11c61dee327651a14c34e18231052e48c069",
            ),
            (
                "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
                "dd48c104698c30cfe2b6142103248622fb7bb0ff692eebb00089b32d22484e16\
                 13912f0a5b694407be899ffd31ed3992c456cdf60f5d4564b8ba3f05a69890ad",
            ),
        ];

        let english = Wordlist::english();
        for (entropy_hex, seed_hex) in cases {
            let entropy = hex::decode(entropy_hex).unwrap();
            let words = mnemonic_from_entropy(&entropy, &english).unwrap();
            let seed = seed_from_mnemonic(&words, "TREZOR");
            assert_eq!(seed.to_hex(), seed_hex, "entropy {}", entropy_hex);
        }
    }

    // -- normalization --

    #[test]
    fn test_nfkd_password_forms_agree() {
        // "café" with a precomposed é versus a combining acute accent.
        let composed = seed_from_mnemonic(&PHRASE_15, "caf\u{e9}");
        let decomposed = seed_from_mnemonic(&PHRASE_15, "cafe\u{301}");
        assert_eq!(composed, decomposed);
        assert_eq!(
            composed.to_hex(),
            "b3ada3ab0dc0d101f08f573be96b4da7209853f32cc4de96924b399d63bff36e\
             095f7966d5f9a48899637ba01d3bcac7c3451e49f9d5d4d4e7327bce0636cede"
        );
    }

    // -- behavior --

    #[test]
    fn test_seed_is_deterministic() {
        let a = seed_from_mnemonic(&PHRASE_15, "pw");
        let b = seed_from_mnemonic(&PHRASE_15, "pw");
        assert_eq!(a, b);
    }

    #[test]
    fn test_password_changes_seed() {
        let a = seed_from_mnemonic(&PHRASE_15, "");
        let b = seed_from_mnemonic(&PHRASE_15, "x");
        assert_ne!(a, b);
    }

    #[test]
    fn test_accepts_owned_words() {
        let owned: Vec<String> = PHRASE_15.iter().map(|w| w.to_string()).collect();
        let from_owned = seed_from_mnemonic(&owned, "");
        let from_borrowed = seed_from_mnemonic(&PHRASE_15, "");
        assert_eq!(from_owned, from_borrowed);
    }

    #[test]
    fn test_display_matches_to_hex() {
        let seed = seed_from_mnemonic(&PHRASE_15, "");
        assert_eq!(seed.to_string(), seed.to_hex());
        assert_eq!(seed.as_bytes().len(), SEED_LENGTH);
    }
}
