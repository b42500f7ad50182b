//! The supported crypt schemes. Tags and salt widths follow the classic
//! crypt(3) conventions: `$1$` MD5 with up to 8 salt characters, `$5$`/`$6$`
//! SHA-256/SHA-512 with up to 16, and the traditional DES scheme with its
//! bare two character salt.

use crate::{
    error::{KryptaError, Result},
    salt::{checked_salt, random_salt, EncodedSalt, SaltShaker},
};

const MD5_SALT_LEN: usize = 8;
const SHA_SALT_LEN: usize = 16;
const STD_DES_SALT_LEN: usize = 2;

/// SHA-256 crypt, the default scheme
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Shaker;

impl SaltShaker for Sha256Shaker {
    fn encode(&self, salt: Option<&str>) -> Result<EncodedSalt> {
        let salt = prefixed_salt(salt, self.scheme(), SHA_SALT_LEN)?;
        Ok(EncodedSalt(salt))
    }

    fn scheme(&self) -> &'static str {
        "$5$"
    }
}

/// SHA-512 crypt
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512Shaker;

impl SaltShaker for Sha512Shaker {
    fn encode(&self, salt: Option<&str>) -> Result<EncodedSalt> {
        let salt = prefixed_salt(salt, self.scheme(), SHA_SALT_LEN)?;
        Ok(EncodedSalt(salt))
    }

    fn scheme(&self) -> &'static str {
        "$6$"
    }
}

/// MD5 crypt, kept for verifying legacy stores
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Shaker;

impl SaltShaker for Md5Shaker {
    fn encode(&self, salt: Option<&str>) -> Result<EncodedSalt> {
        let salt = prefixed_salt(salt, self.scheme(), MD5_SALT_LEN)?;
        Ok(EncodedSalt(salt))
    }

    fn scheme(&self) -> &'static str {
        "$1$"
    }
}

/// Traditional DES crypt: no tag, the encoded salt is exactly the two salt
/// characters themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdDesShaker;

impl SaltShaker for StdDesShaker {
    fn encode(&self, salt: Option<&str>) -> Result<EncodedSalt> {
        let salt = match salt {
            Some(salt) => {
                // the traditional scheme needs the exact width, shorter
                // salts would change which hash the engine derives
                checked_salt(salt, STD_DES_SALT_LEN)?;
                if salt.len() < STD_DES_SALT_LEN {
                    return Err(KryptaError::InvalidSalt(format!(
                        "salt {salt:?} is shorter than {STD_DES_SALT_LEN} characters"
                    )));
                }
                salt.to_string()
            }
            None => random_salt(STD_DES_SALT_LEN)?,
        };

        Ok(EncodedSalt(salt))
    }

    fn scheme(&self) -> &'static str {
        ""
    }
}

fn prefixed_salt(salt: Option<&str>, tag: &str, max_len: usize) -> Result<String> {
    let salt = match salt {
        Some(salt) => checked_salt(salt, max_len)?.to_string(),
        None => random_salt(max_len)?,
    };

    Ok(format!("{tag}{salt}$"))
}
