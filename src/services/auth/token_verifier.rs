use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use thiserror::Error;

use crate::services::auth::claims::Claims;

/// The only algorithm the service accepts. Never taken from the token header.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Process-wide HMAC secret.
///
/// - Key material is intentionally not printable via Debug.
pub struct SigningKey {
    secret: Vec<u8>,
}

impl SigningKey {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.secret)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

// Errors returned by access-token verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token algorithm is not accepted")]
    DisallowedAlgorithm,
    #[error("token '{0}' claim does not match")]
    ClaimMismatch(&'static str),
    #[error("token has expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for VerifyError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidAlgorithm => Self::DisallowedAlgorithm,
            ErrorKind::InvalidIssuer => Self::ClaimMismatch("iss"),
            ErrorKind::InvalidAudience => Self::ClaimMismatch("aud"),
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

/// HS256 access-token verifier.
///
/// `jsonwebtoken::Validation` checks the signature, the pinned algorithm and
/// (when configured) `iss` / `aud`. `exp` is read as a signed integer by
/// `Claims` and compared here against the caller's clock, so `verify_at` stays
/// a pure function, `exp == now` counts as expired, and a negative `exp` is an
/// expired token rather than a malformed one.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(key: &SigningKey, issuer: Option<&str>, audience: Option<&str>) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        // jsonwebtoken parses `exp` as u64; presence is enforced by `Claims`.
        validation.required_spec_claims.clear();

        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key: key.decoding_key(),
            validation,
        }
    }

    /// Verify against the current wall clock.
    pub fn verify(&self, credential: &str) -> Result<Claims, VerifyError> {
        self.verify_at(credential, chrono::Utc::now().timestamp())
    }

    /// Verify against `now` (unix seconds).
    pub fn verify_at(&self, credential: &str, now: i64) -> Result<Claims, VerifyError> {
        if credential.trim().is_empty() {
            return Err(VerifyError::Malformed);
        }

        let data = jsonwebtoken::decode::<Claims>(credential, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        // Fail closed on the boundary.
        if claims.exp <= now {
            return Err(VerifyError::Expired);
        }

        Ok(claims)
    }
}
