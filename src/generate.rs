//! HS256 test-token generation.

use jsonwebtoken::{encode, get_current_timestamp, Algorithm, EncodingKey, Header};
use serde_json::{json, Map, Value};

use crate::error::Result;

/// Number of seconds per validity hour.
const HOUR: i64 = 3600;

/// Build and sign a test token, returning it together with its claims.
///
/// The claim set is fixed: `iss` is the consumer key the gateway looks up
/// the shared secret by, identity claims are derived from `user`, and the
/// validity window runs from now until `hours` hours later. `hours` may be
/// zero or negative to mint an already-expired token.
///
/// The result is standard compact serialization signed with HMAC-SHA256,
/// verifiable by any JWT library holding the same secret.
pub fn generate_token(
    key: &str,
    secret: &str,
    user: &str,
    role: &str,
    hours: i64,
) -> Result<(String, Map<String, Value>)> {
    let iat = get_current_timestamp() as i64;
    let exp = iat + hours * HOUR;

    let mut claims = Map::new();
    claims.insert("iss".to_string(), json!(key));
    claims.insert("exp".to_string(), json!(exp));
    claims.insert("iat".to_string(), json!(iat));
    claims.insert("sub".to_string(), json!(user));
    claims.insert("name".to_string(), json!(format!("User {user}")));
    claims.insert("role".to_string(), json!(role));
    claims.insert("email".to_string(), json!(format!("{user}@example.com")));

    let header = Header::new(Algorithm::HS256);
    let token = encode(&header, &claims, &EncodingKey::from_secret(secret.as_bytes()))?;

    Ok((token, claims))
}
