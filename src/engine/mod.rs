//! Boundary to the external crypto capabilities: symmetric transforms and
//! randomness come from the configured backend, the one-way password hash
//! from a crypt(3) work-alike.

use crate::error::{KryptaError, Result};

cfg_if::cfg_if! {
if #[cfg(feature = "openssl")] {
    mod openssl;
    pub(crate) use self::openssl::{is_available, secure_random_bytes, symmetric_decrypt, symmetric_encrypt};
} else {
    compile_error!("A crypto engine backend is required, enable the `openssl` feature.");
}
}

/// Computes the formatted `{tag}{salt}{digest}` hash string for the scheme
/// selected by the encoded salt's prefix.
pub(crate) fn one_way_hash(password: &str, encoded_salt: &str) -> Result<String> {
    pwhash::unix::crypt(password, encoded_salt).map_err(|err| {
        log::debug!("One-way hash failed: {err}");
        KryptaError::HashingFailure
    })
}

/// Re-derives the hash from the salt embedded in `hashed` and compares the
/// digests in constant time. Never re-implemented here to avoid timing side
/// channels.
pub(crate) fn constant_time_verify(password: &str, hashed: &str) -> bool {
    pwhash::unix::verify(password, hashed)
}
