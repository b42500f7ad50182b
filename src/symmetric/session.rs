use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::{
    engine,
    error::{KryptaError, Result},
    symmetric::{
        algorithm::{self, AlgorithmId},
        CipherMethod, CipherMode,
    },
};

/// The stable 5-field structured output of [`CipherSession::encrypt`].
///
/// Field order and presence never change with method or mode; fields that do
/// not apply are empty (or zero) rather than omitted, so a record is always
/// structurally complete and round-trippable through
/// [`CipherSession::decrypt`]. The positional form used by existing stores is
/// available via [`EncryptionResult::into_record`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionResult {
    /// base64 encoded ciphertext
    pub ciphertext: String,
    /// derived key as lowercase hex
    pub key: String,
    /// numeric options flag the session was configured with
    pub options: u32,
    /// the IV seed as given, empty when none was supplied
    pub iv: String,
    /// authentication tag placeholder, empty for all supported modes
    pub tag: String,
}

impl EncryptionResult {
    /// the 5-element ordered representation
    /// `[ciphertext, key, options, iv, tag]`
    pub fn into_record(self) -> (String, String, u32, String, String) {
        (self.ciphertext, self.key, self.options, self.iv, self.tag)
    }

    pub fn from_record(record: (String, String, u32, String, String)) -> Self {
        let (ciphertext, key, options, iv, tag) = record;
        Self {
            ciphertext,
            key,
            options,
            iv,
            tag,
        }
    }
}

/// A validated symmetric encryption configuration. The algorithm id is
/// resolved and availability-checked at construction, so `encrypt`/`decrypt`
/// never fail on configuration. Sessions hold no key material and retain
/// nothing from previous calls.
pub struct CipherSession {
    method: CipherMethod,
    mode: CipherMode,
    iv: String,
    options: u32,
    algorithm: AlgorithmId,
}

impl CipherSession {
    /// creates a session with no IV, no options and the default (CBC) mode
    /// May fail with
    /// - [`KryptaError::UnsupportedConfiguration`]
    /// - [`KryptaError::EngineUnsupported`]
    pub fn new(method: CipherMethod) -> Result<CipherSession> {
        Self::with_options(method, None, 0, CipherMode::default())
    }

    /// creates a fully configured session. The `iv_seed` is used literally;
    /// the engine zero pads or truncates it to the IV length the algorithm
    /// expects, an absent seed means an all-zero IV.
    /// May fail with
    /// - [`KryptaError::UnsupportedConfiguration`] if the method/mode pairing is outside the enumeration
    /// - [`KryptaError::EngineUnsupported`] if the pairing is valid but the running engine build lacks it
    pub fn with_options(
        method: CipherMethod,
        iv_seed: Option<&str>,
        options: u32,
        mode: CipherMode,
    ) -> Result<CipherSession> {
        let algorithm = algorithm::resolve(method, mode)?;
        if !algorithm::is_available(&algorithm) {
            return Err(KryptaError::EngineUnsupported(algorithm.to_string()));
        }

        log::debug!("Setting up cipher session");
        log::trace!("Algorithm {algorithm} (method {method:?}, mode {mode:?})");
        Ok(CipherSession {
            method,
            mode,
            iv: iv_seed.unwrap_or_default().to_string(),
            options,
            algorithm,
        })
    }

    /// Encrypts `plaintext` with a key derived from `password` (the raw
    /// password bytes, recorded as hex; no stretching is performed by this
    /// layer) and returns the structured result record.
    /// May fail with
    /// - [`KryptaError::EncryptionFailure`]
    pub fn encrypt<P, K>(&self, plaintext: P, password: K) -> Result<EncryptionResult>
    where
        P: AsRef<[u8]>,
        K: AsRef<[u8]>,
    {
        let key = password.as_ref();
        let encrypted = engine::symmetric_encrypt(
            self.algorithm.as_str(),
            key,
            self.iv.as_bytes(),
            self.options,
            plaintext.as_ref(),
        )?;

        Ok(EncryptionResult {
            ciphertext: BASE64.encode(encrypted),
            key: hex::encode(key),
            options: self.options,
            iv: self.iv.clone(),
            tag: String::new(),
        })
    }

    /// Decrypts base64 encoded `ciphertext`, re-deriving the key exactly as
    /// [`CipherSession::encrypt`] does.
    /// May fail with
    /// - [`KryptaError::DecryptionFailure`] if the input is no valid base64 or the engine rejects it
    pub fn decrypt<K>(&self, ciphertext: &str, password: K) -> Result<Vec<u8>>
    where
        K: AsRef<[u8]>,
    {
        let encrypted = BASE64.decode(ciphertext).map_err(|err| {
            log::debug!("Ciphertext is no valid base64: {err}");
            KryptaError::DecryptionFailure
        })?;

        engine::symmetric_decrypt(
            self.algorithm.as_str(),
            password.as_ref(),
            self.iv.as_bytes(),
            self.options,
            &encrypted,
        )
    }

    pub fn method(&self) -> CipherMethod {
        self.method
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn algorithm(&self) -> &AlgorithmId {
        &self.algorithm
    }

    /// the IV seed as configured, empty when none was supplied
    pub fn iv(&self) -> &str {
        &self.iv
    }

    pub fn options(&self) -> u32 {
        self.options
    }
}
