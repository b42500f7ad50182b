/// Represents either success(T) or an failure ([`KryptaError`])
pub type Result<T> = std::result::Result<T, KryptaError>;

/// Represents an error which has occured in the krypta library
#[derive(PartialEq, Eq, Debug, thiserror::Error)]
pub enum KryptaError {
    /// the method/mode combination is outside the supported enumeration,
    /// detected before any engine call
    #[error("Unsupported cipher configuration: {0}")]
    UnsupportedConfiguration(String),

    /// the combination is valid in principle, but the running engine build
    /// lacks the algorithm (e.g. a legacy cipher without the legacy provider)
    #[error("Algorithm {0} is not available in the crypto engine")]
    EngineUnsupported(String),

    /// a supplied salt violates the length or charset contract of the scheme
    #[error("Invalid salt: {0}")]
    InvalidSalt(String),

    /// Failed to encrypt with the engine
    #[error("Failed to encrypt")]
    EncryptionFailure,

    /// ciphertext was malformed, undecodable or rejected by the engine
    #[error("Failed to decrypt")]
    DecryptionFailure,

    /// the engine could not compute the one-way password hash
    #[error("Failed to hash the password")]
    HashingFailure,

    /// the secure randomness source failed
    #[error("Unable to generate random bytes")]
    RandomFailure,
}
