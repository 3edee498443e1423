//! core::hash
//!
//! Content fingerprints for configs.
//!
//! # Canonical form
//!
//! A config is hashed as the concatenation of `key=value\n` for every
//! variable in ascending key order, with nothing before or after. The
//! digest is SHA-1, so any implementation using the same canonical form
//! agrees bit for bit. The fingerprint detects change; it is not a security
//! boundary.
//!
//! # Example
//!
//! ```
//! use herofig::core::model::Config;
//!
//! let cfg: Config = [("KEY", "value")].into_iter().collect();
//! let hash = cfg.hash();
//!
//! assert_eq!(hash.to_string(), "69fad6202326d83472c0e278fdb77e25ab0fd8f7");
//! assert_eq!(hash.mnemonic(2).unwrap(), "kolup-timob");
//! ```

use sha1::{Digest, Sha1};

use super::codec::line;
use super::mnemonic::{self, MnemonicError};
use super::model::Config;

/// Length of a [`Hash`] in bytes.
pub const HASH_LEN: usize = 20;

/// SHA-1 digest of a config's canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; HASH_LEN]);

impl Hash {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Lowercase hex encoding of the full digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Pronounceable label built from the first `2 * length` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MnemonicError::LengthExceeded`] if `length` is greater than
    /// [`Hash::max_mnemonic_length`].
    pub fn mnemonic(&self, length: usize) -> Result<String, MnemonicError> {
        mnemonic::mnemonic(&self.0, length)
    }

    /// Longest mnemonic this hash can produce.
    pub const fn max_mnemonic_length() -> usize {
        HASH_LEN / mnemonic::BYTES_PER_SYLLABLE
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Config {
    /// Fingerprint this config.
    ///
    /// Configs with the same pairs always hash identically, regardless of
    /// the order they were built in.
    pub fn hash(&self) -> Hash {
        let mut hasher = Sha1::new();
        for var in self.iter() {
            hasher.update(line(var.key, var.value).as_bytes());
        }

        let mut bytes = [0u8; HASH_LEN];
        bytes.copy_from_slice(&hasher.finalize());
        Hash(bytes)
    }
}
