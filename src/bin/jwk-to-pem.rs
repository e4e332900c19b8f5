use anyhow::Result;
use jwt_devtools::{jwk_to_pem, Jwk};
use std::io::Read as _;

/// Read an RSA JWK from stdin, print its public key as PEM.
fn main() -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let jwk = Jwk::from_json(&input)?;
    let pem = jwk_to_pem(&jwk)?;

    // The PEM document carries its own final newline; don't add another.
    print!("{pem}");
    Ok(())
}
