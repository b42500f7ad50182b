//! Salt encoding for the crypt schemes the engine understands. Each scheme
//! has its own prefix tag and salt width; a [`SaltShaker`] turns a raw salt
//! (or none, meaning "generate one") into the encoded form the engine
//! expects.

pub mod shakers;

use crate::{
    engine,
    error::{KryptaError, Result},
};

/// the crypt64 alphabet salts are drawn from
const CRYPT64: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An algorithm specific encoded salt, e.g. `$5$mysalt$` for the SHA-256
/// scheme. Opaque to callers, consumed by the engine's one-way hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedSalt(pub(crate) String);

impl EncodedSalt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EncodedSalt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats raw salts for one hashing scheme. Implementations are stateless;
/// new schemes can be added without changing callers.
pub trait SaltShaker {
    /// Encodes `salt` into the scheme's prefixed form, generating a
    /// full-width random salt when `None` is given.
    /// May fail with
    /// - [`KryptaError::InvalidSalt`] if a supplied salt violates the scheme's length or charset contract
    /// - [`KryptaError::RandomFailure`]
    fn encode(&self, salt: Option<&str>) -> Result<EncodedSalt>;

    /// the scheme tag prefixed to hashes, empty for the traditional DES
    /// scheme
    fn scheme(&self) -> &'static str;
}

/// Validates a supplied salt against the crypt64 charset and `max_len`.
pub(crate) fn checked_salt(salt: &str, max_len: usize) -> Result<&str> {
    if salt.len() > max_len {
        return Err(KryptaError::InvalidSalt(format!(
            "salt {:?} is longer than {max_len} characters",
            salt
        )));
    }
    if !salt.bytes().all(|byte| CRYPT64.contains(&byte)) {
        return Err(KryptaError::InvalidSalt(format!(
            "salt {:?} contains characters outside ./0-9A-Za-z",
            salt
        )));
    }

    Ok(salt)
}

/// Draws `len` characters from the crypt64 alphabet using the engine's
/// secure randomness source.
pub(crate) fn random_salt(len: usize) -> Result<String> {
    let bytes = engine::secure_random_bytes(len)?;
    let salt = bytes
        .into_iter()
        .map(|byte| CRYPT64[byte as usize % CRYPT64.len()] as char)
        .collect();

    Ok(salt)
}
