//! RSA JWK to PEM conversion.

use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::{BigUint, RsaPublicKey};
use serde::Deserialize;

use crate::base64url;
use crate::error::{FormatError, Result};

/// The RSA public-key parameters of a JSON Web Key (RFC 7517).
///
/// Only `n` (modulus) and `e` (public exponent) are required; any other
/// members (`kty`, `kid`, `alg`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct Jwk {
    pub n: String,
    pub e: String,
}

impl Jwk {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(FormatError::Jwk)
    }
}

/// Rebuild the public key from its base64url components and emit it as
/// SubjectPublicKeyInfo PEM.
///
/// The input is trusted: beyond what key construction itself enforces, no
/// bit-length or factor-consistency checks are made.
pub fn jwk_to_pem(jwk: &Jwk) -> Result<String> {
    let n = BigUint::from_bytes_be(&base64url::decode(&jwk.n)?);
    let e = BigUint::from_bytes_be(&base64url::decode(&jwk.e)?);

    let key = RsaPublicKey::new(n, e)?;
    Ok(key.to_public_key_pem(LineEnding::LF)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs8::DecodePublicKey;
    use rsa::traits::PublicKeyParts;

    // 2048-bit example key from RFC 7515 appendix A.2.1.
    const N: &str = "ofgWCuLjybRlzo0tZWJjNiuSfb4p4fAkd_wWJcyQoTbji9k0l8W26mPddxHmfHQp-Vaw-4qPCJrcS2mJPMEzP1Pt0Bm4d4QlL-yRT-SFd2lZS-pCgNMsD1W_YpRPEwOWvG6b32690r2jZ47soMZo9wGzjb_7OMg0LOL-bSf63kpaSHSXndS5z5rexMdbBYUsLA9e-KXBdQOS-UTo7WTBEMa2R2CapHg665xsmtdVMTBQY4uDZlxvb3qCo5ZwKh9kG4LT6_I5IhlJH7aGhyxXFvUK-DWNmoudF8NAco9_h9iaGNj8q2ethFkMLs91kzk2PAcDTW9gb54h4FRWyuXpoQ";
    const E: &str = "AQAB";

    #[test]
    fn pem_round_trips_to_original_components() {
        let jwk = Jwk {
            n: N.to_string(),
            e: E.to_string(),
        };
        let pem = jwk_to_pem(&jwk).unwrap();
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
        assert!(pem.trim_end().ends_with("-----END PUBLIC KEY-----"));

        let key = RsaPublicKey::from_public_key_pem(&pem).unwrap();
        assert_eq!(
            key.n(),
            &BigUint::from_bytes_be(&base64url::decode(N).unwrap())
        );
        assert_eq!(key.e(), &BigUint::from(65537u32));
    }

    #[test]
    fn parses_jwk_with_extra_members() {
        let jwk = Jwk::from_json(&format!(
            r#"{{"kty":"RSA","kid":"2011-04-29","use":"sig","n":"{N}","e":"{E}"}}"#
        ))
        .unwrap();
        assert_eq!(jwk.e, "AQAB");
    }

    #[test]
    fn rejects_missing_field() {
        assert!(matches!(
            Jwk::from_json(r#"{"n":"AQAB"}"#),
            Err(FormatError::Jwk(_))
        ));
    }

    #[test]
    fn rejects_invalid_base64url() {
        let jwk = Jwk {
            n: "not base64url!".to_string(),
            e: E.to_string(),
        };
        assert!(matches!(jwk_to_pem(&jwk), Err(FormatError::Base64(_))));
    }

    #[test]
    fn rejects_unusable_exponent() {
        // Empty e decodes to zero, which cannot be an RSA exponent.
        let jwk = Jwk {
            n: N.to_string(),
            e: String::new(),
        };
        assert!(jwk_to_pem(&jwk).is_err());
    }
}
