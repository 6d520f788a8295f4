use clap::Parser;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;

/// Mint an HS256 access token for exercising the admin API locally.
///
/// Claims match what the API expects:
/// - `sub`, `email`, `nombre`, `role`
/// - `iat` = now (or `--iat`), `exp` = iat + ttl
/// - `iss` / `aud` only when given
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// HMAC secret; must match the server's JWT_SECRET
    #[arg(long, env = "JWT_SECRET")]
    secret: String,

    #[arg(long, default_value = "admin-001")]
    sub: String,

    #[arg(long, default_value = "admin@devflow.com")]
    email: String,

    /// Display name (`nombre` claim)
    #[arg(long, default_value = "Administrador DevFlow")]
    name: String,

    /// Role claim. Pass an empty string to omit it.
    #[arg(long, default_value = "admin")]
    role: String,

    /// Lifetime in seconds. Negative values mint an already-expired token.
    #[arg(long, default_value_t = 3600, allow_hyphen_values = true)]
    ttl: i64,

    /// Override iat (unix seconds). Default: now.
    #[arg(long)]
    iat: Option<i64>,

    #[arg(long)]
    issuer: Option<String>,

    #[arg(long)]
    audience: Option<String>,

    /// Print only the token (no extra lines)
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Debug, Serialize)]
struct AccessClaims {
    sub: String,
    email: String,
    nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    iat: i64,
    exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    iss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aud: Option<String>,
}

impl AccessClaims {
    fn from_args(args: &Args, now: i64) -> Self {
        let iat = args.iat.unwrap_or(now);

        Self {
            sub: args.sub.clone(),
            email: args.email.clone(),
            nombre: args.name.clone(),
            role: Some(args.role.clone()).filter(|r| !r.is_empty()),
            iat,
            exp: iat + args.ttl,
            iss: args.issuer.clone(),
            aud: args.audience.clone(),
        }
    }
}

fn sign(claims: &AccessClaims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".to_string());
    jsonwebtoken::encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let claims = AccessClaims::from_args(&args, chrono::Utc::now().timestamp());
    let token = sign(&claims, &args.secret)?;

    if args.quiet {
        println!("{}", token);
        return Ok(());
    }

    println!("token: {}", token);
    println!("claims: {}", serde_json::to_string_pretty(&claims)?);
    println!("header: Authorization: Bearer {}", token);

    Ok(())
}
