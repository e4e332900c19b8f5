//! Small JWT/JWK helpers for API gateway testing.
//!
//! Three independent pipelines, each exposed as a pure function and wrapped
//! by a binary under `src/bin/`:
//!
//! - [`jwk_to_pem`] — rebuild an RSA public key from a JWK's `n`/`e` and
//!   emit it as SubjectPublicKeyInfo PEM (`jwk-to-pem`).
//! - [`decode_payload`] — split a compact JWT and pretty-print its payload
//!   without verifying the signature (`decode-jwt`).
//! - [`generate_token`] — mint an HS256-signed test token with a fixed
//!   claim set (`generate-jwt`).

pub mod base64url;
pub mod decode;
pub mod error;
pub mod generate;
pub mod jwk;

pub use decode::decode_payload;
pub use error::FormatError;
pub use generate::generate_token;
pub use jwk::{jwk_to_pem, Jwk};
