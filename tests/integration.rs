use pretty_assertions::assert_eq;
use rand::{rng, Rng};
use test_case::test_case;

use krypta::{
    error::KryptaError,
    password::Password,
    salt::shakers::{Md5Shaker, Sha256Shaker, Sha512Shaker, StdDesShaker},
    salt::SaltShaker,
    symmetric::session::CipherSession,
    symmetric::ZERO_PADDING,
    CipherMethod, CipherMode,
};

const PAYLOAD: &str = "You know nothing Jon Snow! Winter is coming!";
const PASSWORD: &str = "The White Wolf";
const PASSWORD_HEX: &str = "54686520576869746520576f6c66";
const IV: &str = "Ygritte";

// reference ciphertexts for the triple-3-key DES method, with and without
// the IV seed
const PAYLOAD_DES3_3K_BASE64: &str = "D0yh2ZxV3j23pFY82CpSR8sS+ATVFkHKeCCRhGnnLXtY3hxroZm7VAPzSxeML7Jb";
const PAYLOAD_DES3_3K_BASE64_IV: &str =
    "+TbIi6QM4VHYsnR7sFj9WAIILSnjCDwQBHPhk0JHR8Hf/x+p96wXWR5bDq6KP2Ev";

/// DES, two-key triple DES and DESX live in OpenSSL's legacy provider, so a
/// session for them may legitimately be unavailable in this engine build.
fn session_or_skip(
    method: CipherMethod,
    iv_seed: Option<&str>,
    mode: CipherMode,
) -> Option<CipherSession> {
    match CipherSession::with_options(method, iv_seed, 0, mode) {
        Ok(session) => Some(session),
        Err(KryptaError::EngineUnsupported(_)) => None,
        Err(err) => panic!("unexpected construction failure: {err}"),
    }
}

fn encrypt_decrypt_random_payload(method: CipherMethod, mode: CipherMode, iv_seed: Option<&str>) {
    let Some(session) = session_or_skip(method, iv_seed, mode) else {
        return;
    };

    let mut payload = vec![0u8; 64];
    rng().fill(payload.as_mut_slice());

    let result = session.encrypt(&payload, PASSWORD).unwrap();
    let decrypted = session.decrypt(&result.ciphertext, PASSWORD).unwrap();

    assert_eq!(payload, decrypted);
}

#[test_case(CipherMethod::DesSimple, CipherMode::Cbc)]
#[test_case(CipherMethod::DesSimple, CipherMode::Ecb)]
#[test_case(CipherMethod::DesSimple, CipherMode::Cfb)]
#[test_case(CipherMethod::DesSimple, CipherMode::Ofb)]
#[test_case(CipherMethod::DesTriple2Key, CipherMode::Cbc)]
#[test_case(CipherMethod::DesTriple2Key, CipherMode::Ecb)]
#[test_case(CipherMethod::DesTriple3Key, CipherMode::Cbc)]
#[test_case(CipherMethod::DesTriple3Key, CipherMode::Ecb)]
#[test_case(CipherMethod::DesTriple3Key, CipherMode::Ofb)]
#[test_case(CipherMethod::DesX, CipherMode::Cbc)]
#[test_case(CipherMethod::Aes128, CipherMode::Cbc)]
#[test_case(CipherMethod::Aes128, CipherMode::Ctr)]
#[test_case(CipherMethod::Aes192, CipherMode::Cfb)]
#[test_case(CipherMethod::Aes256, CipherMode::Cbc)]
#[test_case(CipherMethod::Aes256, CipherMode::Ecb)]
#[test_case(CipherMethod::Aes256, CipherMode::Ofb)]
fn round_trip_without_iv(method: CipherMethod, mode: CipherMode) {
    encrypt_decrypt_random_payload(method, mode, None);
}

#[test_case(CipherMethod::DesSimple, CipherMode::Cbc)]
#[test_case(CipherMethod::DesTriple2Key, CipherMode::Cbc)]
#[test_case(CipherMethod::DesTriple3Key, CipherMode::Cbc)]
#[test_case(CipherMethod::DesX, CipherMode::Cbc)]
#[test_case(CipherMethod::Aes128, CipherMode::Cbc)]
#[test_case(CipherMethod::Aes256, CipherMode::Ctr)]
fn round_trip_with_iv(method: CipherMethod, mode: CipherMode) {
    encrypt_decrypt_random_payload(method, mode, Some(IV));
}

#[test]
fn triple_3key_des_matches_the_reference_ciphertext() {
    let Some(session) = session_or_skip(CipherMethod::DesTriple3Key, None, CipherMode::Cbc) else {
        return;
    };

    let result = session.encrypt(PAYLOAD, PASSWORD).unwrap();

    assert_eq!(result.ciphertext, PAYLOAD_DES3_3K_BASE64);
    assert_eq!(result.key, PASSWORD_HEX);
    assert_eq!(result.options, 0);
    assert_eq!(result.iv, "");
    assert_eq!(result.tag, "");

    let decrypted = session.decrypt(PAYLOAD_DES3_3K_BASE64, PASSWORD).unwrap();
    assert_eq!(decrypted, PAYLOAD.as_bytes());
}

#[test]
fn triple_3key_des_matches_the_reference_ciphertext_with_iv() {
    let Some(session) = session_or_skip(CipherMethod::DesTriple3Key, Some(IV), CipherMode::Cbc)
    else {
        return;
    };

    let result = session.encrypt(PAYLOAD, PASSWORD).unwrap();

    assert_eq!(result.ciphertext, PAYLOAD_DES3_3K_BASE64_IV);
    assert_eq!(result.key, PASSWORD_HEX);
    assert_eq!(result.iv, IV);

    let decrypted = session
        .decrypt(PAYLOAD_DES3_3K_BASE64_IV, PASSWORD)
        .unwrap();
    assert_eq!(decrypted, PAYLOAD.as_bytes());
}

#[test]
fn zero_padding_round_trips_block_aligned_payloads() {
    let session =
        CipherSession::with_options(CipherMethod::Aes128, Some(IV), ZERO_PADDING, CipherMode::Cbc)
            .unwrap();
    let payload = [42u8; 32];

    let result = session.encrypt(payload, PASSWORD).unwrap();
    assert_eq!(result.options, ZERO_PADDING);

    let decrypted = session.decrypt(&result.ciphertext, PASSWORD).unwrap();
    assert_eq!(decrypted, payload);
}

#[test]
fn tampered_ciphertext_never_yields_the_original_plaintext() {
    // CBC is unauthenticated: a flipped byte either trips the padding check
    // or produces different plaintext
    let session = CipherSession::new(CipherMethod::Aes256).unwrap();
    let result = session.encrypt(PAYLOAD, PASSWORD).unwrap();

    let mut raw = base64_decode(&result.ciphertext);
    raw[0] ^= 0x01;
    let tampered = base64_encode(&raw);

    match session.decrypt(&tampered, PASSWORD) {
        Ok(decrypted) => assert_ne!(decrypted, PAYLOAD.as_bytes()),
        Err(err) => assert_eq!(err, KryptaError::DecryptionFailure),
    }
}

#[test]
fn garbage_ciphertext_fails_to_decrypt() {
    let session = CipherSession::new(CipherMethod::Aes256).unwrap();

    assert_eq!(
        session.decrypt("not base64 at all!", PASSWORD),
        Err(KryptaError::DecryptionFailure)
    );
}

#[test]
fn wrong_password_does_not_round_trip() {
    let session = CipherSession::new(CipherMethod::Aes256).unwrap();
    let result = session.encrypt(PAYLOAD, PASSWORD).unwrap();

    match session.decrypt(&result.ciphertext, "A Girl Has No Name") {
        Ok(decrypted) => assert_ne!(decrypted, PAYLOAD.as_bytes()),
        Err(err) => assert_eq!(err, KryptaError::DecryptionFailure),
    }
}

fn base64_decode(encoded: &str) -> Vec<u8> {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap()
}

fn base64_encode(raw: &[u8]) -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(raw)
}

#[test_case(Box::new(Sha256Shaker), "$5$"; "sha256")]
#[test_case(Box::new(Sha512Shaker), "$6$"; "sha512")]
#[test_case(Box::new(Md5Shaker), "$1$"; "md5")]
#[test_case(Box::new(StdDesShaker), ""; "std des")]
fn hash_and_verify_across_schemes(shaker: Box<dyn SaltShaker>, tag: &str) {
    let password = Password::with_salt_shaker(PASSWORD, shaker);

    let hashed = password.hashed(None).unwrap();

    assert!(hashed.starts_with(tag));
    assert!(Password::verify(PASSWORD, &hashed));
    assert!(!Password::verify("A Girl Has No Name", &hashed));
}

#[test]
fn hashing_with_an_explicit_salt_is_deterministic() {
    let password = Password::new(PASSWORD);

    let first = password.hashed(Some("sevenkingdoms")).unwrap();
    let second = password.hashed(Some("sevenkingdoms")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn hashing_with_generated_salts_differs_between_calls() {
    let password = Password::new(PASSWORD);

    let first = password.hashed(None).unwrap();
    let second = password.hashed(None).unwrap();

    assert_ne!(first, second);
    // but both still verify against the plaintext
    assert!(Password::verify(PASSWORD, &first));
    assert!(Password::verify(PASSWORD, &second));
}
