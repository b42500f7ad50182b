pub mod algorithm;
pub mod session;

use crate::error::KryptaError;

/// Options bit disabling the engine's block padding, for interop with stored
/// records that carry the numeric flag. Unknown bits are ignored.
pub const ZERO_PADDING: u32 = 0x2;

/// Group of related cipher methods sharing a key schedule size class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CipherFamily {
    Des,
    Aes,
}

/// Depicts which symmetric key schedule variant is used for encryption.
/// Each method implies a canonical key length, see [`CipherMethod::key_length`].
///
/// The discriminants are stable codes used by stored configurations,
/// convertible via [`TryFrom<u16>`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CipherMethod {
    /// single DES with a 8 byte key
    DesSimple = 0,
    /// two-key triple DES (EDE) with a 16 byte key
    DesTriple2Key = 1,
    /// three-key triple DES (EDE3) with a 24 byte key
    DesTriple3Key = 2,
    /// DESX (XEX whitening) with a 24 byte key
    DesX = 3,
    /// AES with a 128 bit key
    Aes128 = 10,
    /// AES with a 192 bit key
    Aes192 = 11,
    /// AES with a 256 bit key
    Aes256 = 12,
}

impl CipherMethod {
    pub fn family(self) -> CipherFamily {
        match self {
            CipherMethod::DesSimple
            | CipherMethod::DesTriple2Key
            | CipherMethod::DesTriple3Key
            | CipherMethod::DesX => CipherFamily::Des,
            CipherMethod::Aes128 | CipherMethod::Aes192 | CipherMethod::Aes256 => CipherFamily::Aes,
        }
    }

    /// canonical key length in bytes
    pub fn key_length(self) -> usize {
        match self {
            CipherMethod::DesSimple => 8,
            CipherMethod::DesTriple2Key => 16,
            CipherMethod::DesTriple3Key | CipherMethod::DesX | CipherMethod::Aes192 => 24,
            CipherMethod::Aes128 => 16,
            CipherMethod::Aes256 => 32,
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            CipherMethod::DesSimple => "des",
            CipherMethod::DesTriple2Key => "des-ede",
            CipherMethod::DesTriple3Key => "des-ede3",
            CipherMethod::DesX => "desx",
            CipherMethod::Aes128 => "aes-128",
            CipherMethod::Aes192 => "aes-192",
            CipherMethod::Aes256 => "aes-256",
        }
    }
}

impl TryFrom<u16> for CipherMethod {
    type Error = KryptaError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CipherMethod::DesSimple),
            1 => Ok(CipherMethod::DesTriple2Key),
            2 => Ok(CipherMethod::DesTriple3Key),
            3 => Ok(CipherMethod::DesX),
            10 => Ok(CipherMethod::Aes128),
            11 => Ok(CipherMethod::Aes192),
            12 => Ok(CipherMethod::Aes256),
            _ => Err(KryptaError::UnsupportedConfiguration(format!(
                "unknown cipher method code {code}"
            ))),
        }
    }
}

/// Block chaining mode applied on top of a [`CipherMethod`]. Not all modes
/// are valid for all methods, see [`algorithm::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CipherMode {
    Cbc = 0,
    Ecb = 1,
    Cfb = 2,
    Ofb = 3,
    Ctr = 4,
}

impl CipherMode {
    pub(crate) fn token(self) -> &'static str {
        match self {
            CipherMode::Cbc => "cbc",
            CipherMode::Ecb => "ecb",
            CipherMode::Cfb => "cfb",
            CipherMode::Ofb => "ofb",
            CipherMode::Ctr => "ctr",
        }
    }
}

impl Default for CipherMode {
    fn default() -> Self {
        CipherMode::Cbc
    }
}

impl TryFrom<u16> for CipherMode {
    type Error = KryptaError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CipherMode::Cbc),
            1 => Ok(CipherMode::Ecb),
            2 => Ok(CipherMode::Cfb),
            3 => Ok(CipherMode::Ofb),
            4 => Ok(CipherMode::Ctr),
            _ => Err(KryptaError::UnsupportedConfiguration(format!(
                "unknown cipher mode code {code}"
            ))),
        }
    }
}
