//! base64url engines shared by the tools.
//!
//! JWT segments are encoded without padding, but input copied out of logs or
//! config files often arrives either way. Decoding therefore restores `=`
//! padding first and accepts both forms.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;

use crate::error::Result;

/// Restore `=` padding to a multiple of 4. Already-padded input is returned
/// unchanged, so the operation is idempotent.
pub fn pad(input: &str) -> String {
    match input.len() % 4 {
        0 => input.to_string(),
        rem => format!("{input}{}", "=".repeat(4 - rem)),
    }
}

/// Decode base64url input, padded or not.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE.decode(pad(input))?)
}

/// Encode without padding, as JWT segments are written.
pub fn encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}
