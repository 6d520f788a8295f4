//! Token minting helpers shared by the auth, middleware and router tests.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Value, json};

use crate::services::auth::{AdminGate, SigningKey, TokenVerifier};

pub const TEST_SECRET: &str = "test-secret-for-admin-api";

// 2024-01-01T00:00:00Z
pub const NOW: i64 = 1_704_067_200;

pub fn admin_claims(exp: i64) -> Value {
    json!({
        "sub": "admin-001",
        "email": "admin@devflow.com",
        "nombre": "Administrador DevFlow",
        "role": "admin",
        "iat": NOW - 60,
        "exp": exp,
    })
}

pub fn user_claims(exp: i64) -> Value {
    json!({
        "sub": "user-001",
        "email": "user@devflow.com",
        "nombre": "Usuario Demo",
        "role": "user",
        "iat": NOW - 60,
        "exp": exp,
    })
}

pub fn mint(claims: &Value) -> String {
    mint_with(claims, TEST_SECRET, Algorithm::HS256)
}

pub fn mint_with(claims: &Value, secret: &str, algorithm: Algorithm) -> String {
    jsonwebtoken::encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encode test token")
}

/// Admin token valid for an hour of wall-clock time.
pub fn live_admin_token() -> String {
    mint(&admin_claims(chrono::Utc::now().timestamp() + 3600))
}

pub fn live_user_token() -> String {
    mint(&user_claims(chrono::Utc::now().timestamp() + 3600))
}

pub fn test_gate() -> AdminGate {
    AdminGate::new(TokenVerifier::new(&SigningKey::new(TEST_SECRET), None, None))
}
