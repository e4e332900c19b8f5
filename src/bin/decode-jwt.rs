use jwt_devtools::decode_payload;
use std::io::Read as _;
use std::process::exit;

/// Read a compact JWT from stdin and pretty-print its payload.
///
/// The signature is not verified; this is for inspecting tokens during
/// debugging, not for authenticating them.
fn main() {
    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Could not read token from stdin: {err}");
        exit(1);
    }

    let token = input.trim();
    if token.is_empty() {
        eprintln!("Error: No token provided via stdin");
        exit(1);
    }

    match decode_payload(token) {
        Ok(payload) => {
            let pretty = serde_json::to_string_pretty(&payload)
                .expect("claims mapping serializes as JSON");
            println!("🔍 Token payload (decoded):");
            println!("{pretty}");
        }
        Err(err) => {
            eprintln!("Could not decode token payload: {err}");
            exit(1);
        }
    }
}
