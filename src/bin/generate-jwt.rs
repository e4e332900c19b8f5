use anyhow::Result;
use clap::Parser;
use jwt_devtools::generate_token;

/// Generate JWT tokens for testing an API gateway.
#[derive(Parser, Debug)]
#[command(version, about = "Generate JWT tokens for Kong")]
struct Args {
    /// Kong consumer key
    #[arg(long)]
    key: String,

    /// Kong consumer secret
    #[arg(long)]
    secret: String,

    /// User ID
    #[arg(long, default_value = "testuser")]
    user: String,

    /// User role
    #[arg(long, default_value = "user")]
    role: String,

    /// Token validity in hours
    #[arg(long, default_value_t = 1)]
    hours: i64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (token, payload) =
        generate_token(&args.key, &args.secret, &args.user, &args.role, args.hours)?;

    let rule = "=".repeat(60);
    println!("{rule}");
    println!("JWT Token Generated Successfully!");
    println!("{rule}");
    println!("Token: {token}");
    println!("\nPayload:");
    println!("{}", serde_json::to_string_pretty(&payload)?);
    println!("\nTest Command:");
    println!(
        "curl -H \"Host: api.local\" -H \"Authorization: Bearer {token}\" http://localhost:8000/api/get"
    );
    println!("{rule}");

    Ok(())
}
