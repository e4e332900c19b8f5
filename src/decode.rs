//! Compact-JWT payload decoding, without signature verification.

use serde_json::{Map, Value};

use crate::base64url;
use crate::error::{FormatError, Result};

/// Decode the payload segment of a compact JWT into a claims mapping.
///
/// The token is split into its header, payload and signature segments; only
/// the payload is base64url-decoded and parsed. The signature is never
/// checked - this is an inspection tool, not an authentication proof.
pub fn decode_payload(token: &str) -> Result<Map<String, Value>> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(FormatError::SegmentCount(parts.len()));
    }

    let bytes = base64url::decode(parts[1])?;
    let text = String::from_utf8(bytes)?;

    match serde_json::from_str(&text)? {
        Value::Object(claims) => Ok(claims),
        _ => Err(FormatError::PayloadNotObject),
    }
}
