use thiserror::Error;

pub type Result<T, E = FormatError> = std::result::Result<T, E>;

/// Everything that can go wrong while transforming JWKs and JWTs.
///
/// All failures are terminal; the binaries report them on stderr and exit
/// non-zero. Nothing is retried or partially recovered.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Input was not a JSON object with string fields `n` and `e`.
    #[error("invalid JWK: {0}")]
    Jwk(#[source] serde_json::Error),

    /// A compact JWT must have exactly three dot-separated parts.
    #[error("invalid JWT format - expected 3 dot-separated parts, found {0}")]
    SegmentCount(usize),

    #[error("invalid base64url data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not the claims object a JWT payload is defined to be.
    #[error("payload is not a JSON object")]
    PayloadNotObject,

    /// The decoded (e, n) pair does not form a usable RSA public key.
    #[error("cannot build RSA public key: {0}")]
    RsaKey(#[from] rsa::Error),

    #[error("cannot encode public key as PEM: {0}")]
    Pem(#[from] rsa::pkcs8::spki::Error),

    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}
