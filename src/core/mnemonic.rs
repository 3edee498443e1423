//! core::mnemonic
//!
//! Pronounceable labels for digests.
//!
//! Each 16-bit big-endian chunk becomes a five letter proquint syllable
//! (consonant, vowel, consonant, vowel, consonant), and syllables are joined
//! with `-`. The layout follows <https://arxiv.org/html/0901.4016>.
//!
//! ```
//! use herofig::core::mnemonic::{mnemonic, proquint};
//!
//! assert_eq!(proquint(0x0000), *b"babab");
//! assert_eq!(proquint(0xffff), *b"zuzuz");
//! assert_eq!(mnemonic(&[0x7f, 0x00, 0x3f, 0x3f], 2).unwrap(), "lusab-gusuz");
//! ```

use thiserror::Error;

const CONSONANTS: &[u8; 16] = b"bdfghjklmnprstvz";
const VOWELS: &[u8; 4] = b"aiou";

/// Bytes consumed by one syllable.
pub const BYTES_PER_SYLLABLE: usize = 2;

/// Errors from mnemonic encoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error(
        "length of {requested} exceeds maximum possible length {max} for hash of length {hash_bits}"
    )]
    LengthExceeded {
        requested: usize,
        max: usize,
        hash_bits: usize,
    },
}

/// Longest mnemonic that can be taken from `len` bytes.
pub fn max_length(len: usize) -> usize {
    len / BYTES_PER_SYLLABLE
}

/// Encode one 16-bit value as a syllable.
pub fn proquint(x: u16) -> [u8; 5] {
    let consonant = |shift: u16| CONSONANTS[usize::from((x >> shift) & 0x0f)];
    let vowel = |shift: u16| VOWELS[usize::from((x >> shift) & 0x03)];

    [
        consonant(12),
        vowel(10),
        consonant(6),
        vowel(4),
        consonant(0),
    ]
}

/// Build a mnemonic of `length` syllables from the start of `bytes`.
///
/// # Errors
///
/// Returns [`MnemonicError::LengthExceeded`] if `bytes` holds fewer than
/// `2 * length` bytes. The result is never silently truncated.
pub fn mnemonic(bytes: &[u8], length: usize) -> Result<String, MnemonicError> {
    let max = max_length(bytes.len());
    if length > max {
        return Err(MnemonicError::LengthExceeded {
            requested: length,
            max,
            hash_bits: bytes.len() * 8,
        });
    }

    let syllables: Vec<String> = bytes
        .chunks_exact(BYTES_PER_SYLLABLE)
        .take(length)
        .map(|chunk| {
            let syllable = proquint(u16::from_be_bytes([chunk[0], chunk[1]]));
            // CONSONANTS and VOWELS are ASCII.
            syllable.iter().map(|&b| char::from(b)).collect()
        })
        .collect();

    Ok(syllables.join("-"))
}
