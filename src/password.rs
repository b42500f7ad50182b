use crate::{
    engine,
    error::Result,
    salt::{shakers::Sha256Shaker, SaltShaker},
};

/// Pairs a plaintext password with the [`SaltShaker`] used to hash it.
///
/// The plaintext defaults to the empty string (never absent) so hashing is
/// always possible, and a missing shaker is replaced by the default SHA-256
/// scheme at construction time. The plaintext lives only in process memory.
pub struct Password {
    plain: String,
    salt_shaker: Box<dyn SaltShaker>,
}

impl Password {
    /// creates a password hashed with the default SHA-256 scheme
    pub fn new<P>(plain: P) -> Password
    where
        P: Into<String>,
    {
        Password {
            plain: plain.into(),
            salt_shaker: Box::new(Sha256Shaker),
        }
    }

    /// creates a password hashed with the given scheme
    pub fn with_salt_shaker<P>(plain: P, salt_shaker: Box<dyn SaltShaker>) -> Password
    where
        P: Into<String>,
    {
        Password {
            plain: plain.into(),
            salt_shaker,
        }
    }

    /// Verifies that `hashed` matches `password` by delegating to the
    /// engine's constant-time comparator, which re-derives the digest from
    /// the salt embedded in `hashed`.
    pub fn verify(password: &str, hashed: &str) -> bool {
        engine::constant_time_verify(password, hashed)
    }

    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// sets the plaintext, `None` resets it to the empty string
    pub fn set_plain(&mut self, plain: Option<&str>) {
        self.plain = plain.unwrap_or_default().to_string();
    }

    pub fn salt_shaker(&self) -> &dyn SaltShaker {
        self.salt_shaker.as_ref()
    }

    /// sets the scheme, `None` resets to the default SHA-256 scheme
    pub fn set_salt_shaker(&mut self, salt_shaker: Option<Box<dyn SaltShaker>>) {
        self.salt_shaker = salt_shaker.unwrap_or_else(|| Box::new(Sha256Shaker));
    }

    /// Hashes the stored plaintext with the given salt (generating one when
    /// `None`) using the current scheme.
    /// May fail with
    /// - [`crate::error::KryptaError::InvalidSalt`]
    /// - [`crate::error::KryptaError::HashingFailure`]
    pub fn hashed(&self, salt: Option<&str>) -> Result<String> {
        self.hash(&self.plain, salt)
    }

    /// Hashes `password` with the given salt using the current scheme,
    /// returning the engine's formatted `{tag}{salt}{digest}` string
    /// verbatim.
    pub fn hash(&self, password: &str, salt: Option<&str>) -> Result<String> {
        let encoded_salt = self.salt_shaker.encode(salt)?;
        engine::one_way_hash(password, encoded_salt.as_str())
    }
}

impl Default for Password {
    fn default() -> Self {
        Password::new("")
    }
}
