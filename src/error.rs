/// Unified error type for all mnemonic and seed operations.
///
/// Covers strength/length validation, bitstream parsing, dictionary
/// integrity, and randomness-source failures. Every variant carries
/// enough context to diagnose the failure without inspecting internals.
#[derive(Debug, thiserror::Error)]
pub enum MnemonicError {
    /// Requested entropy strength is not an approved BIP-39 strength.
    #[error("invalid strength {got}: must be one of 128, 160, 192, 224, 256")]
    InvalidStrength { got: usize },

    /// Entropy byte length does not correspond to an approved strength.
    #[error("invalid entropy length {got} bytes: must be one of 16, 20, 24, 28, 32")]
    InvalidEntropyLength { got: usize },

    /// Entropy+checksum bitstream has a length outside the approved set.
    #[error("invalid bitstream length {got}: must be one of 132, 165, 198, 231, 264")]
    InvalidBitstreamLength { got: usize },

    /// An 11-bit group is not a plain base-2 literal of exactly 11 digits.
    #[error("invalid index group '{0}': want 11 binary digits")]
    InvalidIndexFormat(String),

    /// Word list does not contain exactly 2048 entries.
    #[error("invalid dictionary size: expected {expected}, got {got}")]
    InvalidDictionarySize { expected: usize, got: usize },

    /// Word list violates an integrity invariant (duplicate or empty word,
    /// or an index resolved past the end of the list).
    #[error("corrupt dictionary: {0}")]
    CorruptDictionary(String),

    /// The operating-system randomness source could not supply bytes.
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    /// Word-list file could not be read.
    #[error("wordlist io error: {0}")]
    Io(#[from] std::io::Error),
}
