//! # krypta
//! A thin cryptographic-configuration layer: it selects, validates and
//! parameterizes symmetric-cipher algorithms ([`symmetric::session::CipherSession`])
//! and password-hashing schemes ([`password::Password`]), delegating the actual
//! transforms to an external crypto engine.
//!
//! # Optional features
//!
//! - **`openssl`** *(enabled by default)* — Uses the [rust-openssl](https://crates.io/crates/openssl)
//! crate as the symmetric cipher and randomness engine. Per default the OpenSSL library is locally
//! compiled and then statically linked. The build process requires a C compiler, `perl` (and
//! `perl-core`), and `make`. For further options see the
//! [openssl crate documentation](https://docs.rs/openssl/0.10.55/openssl/).
//!
//! Note that cipher availability depends on the engine build: OpenSSL 3 moved
//! single DES, two-key triple DES and DESX into the legacy provider, so
//! sessions for those fail with [`error::KryptaError::EngineUnsupported`]
//! unless that provider is loaded.

#![deny(clippy::missing_panics_doc)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    clippy::doc_markdown,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::inconsistent_struct_constructor,
    clippy::map_unwrap_or,
    clippy::match_same_arms
)]

mod engine;

/// error definitions
pub mod error;
/// salted password hashing and verification
pub mod password;
/// salt encoding for the supported crypt schemes
pub mod salt;
/// symmetric cipher configuration, algorithm resolution and encryption sessions
pub mod symmetric;

pub use symmetric::{CipherFamily, CipherMethod, CipherMode};
