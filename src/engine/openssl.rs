use crate::{
    error::{KryptaError, Result},
    symmetric::ZERO_PADDING,
};

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Queries the engine for the algorithm on every call instead of caching,
/// as provider availability depends on the running build.
pub(crate) fn is_available(algorithm: &str) -> bool {
    openssl::cipher::Cipher::fetch(None, algorithm, None).is_ok()
}

pub(crate) fn symmetric_encrypt(
    algorithm: &str,
    key: &[u8],
    iv: &[u8],
    options: u32,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    transform(Direction::Encrypt, algorithm, key, iv, options, plaintext).map_err(|err| {
        log::debug!("Encryption failed, OpenSSL error stack: {err}");
        KryptaError::EncryptionFailure
    })
}

pub(crate) fn symmetric_decrypt(
    algorithm: &str,
    key: &[u8],
    iv: &[u8],
    options: u32,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    transform(Direction::Decrypt, algorithm, key, iv, options, ciphertext).map_err(|err| {
        log::debug!("Decryption failed, OpenSSL error stack: {err}");
        KryptaError::DecryptionFailure
    })
}

pub(crate) fn secure_random_bytes(n: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0; n];
    openssl::rand::rand_bytes(&mut bytes).map_err(|err| {
        log::debug!("RAND failed, OpenSSL error stack: {err}");
        KryptaError::RandomFailure
    })?;

    Ok(bytes)
}

fn transform(
    direction: Direction,
    algorithm: &str,
    key: &[u8],
    iv: &[u8],
    options: u32,
    data: &[u8],
) -> std::result::Result<Vec<u8>, openssl::error::ErrorStack> {
    let cipher = openssl::cipher::Cipher::fetch(None, algorithm, None)?;
    // EVP insists on exact key/IV sizes, so short inputs are zero padded and
    // long ones truncated, matching the reference engine behavior
    let key = fit(key, cipher.key_length());
    let iv = fit(iv, cipher.iv_length());
    let iv = if iv.is_empty() {
        None
    } else {
        Some(iv.as_slice())
    };

    let mut ctx = openssl::cipher_ctx::CipherCtx::new()?;
    match direction {
        Direction::Encrypt => ctx.encrypt_init(Some(&cipher), Some(&key), iv)?,
        Direction::Decrypt => ctx.decrypt_init(Some(&cipher), Some(&key), iv)?,
    }
    if options & ZERO_PADDING != 0 {
        ctx.set_padding(false);
    }

    let mut out = Vec::with_capacity(data.len() + cipher.block_size());
    ctx.cipher_update_vec(data, &mut out)?;
    ctx.cipher_final_vec(&mut out)?;

    Ok(out)
}

fn fit(bytes: &[u8], len: usize) -> Vec<u8> {
    let mut fitted = bytes.to_vec();
    fitted.resize(len, 0);
    fitted
}
