use thiserror::Error;

use crate::services::auth::claims::{Claims, Role};
use crate::services::auth::token_verifier::{TokenVerifier, VerifyError};

/// Why the gate refused a request. Each value is terminal for that request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("missing or malformed bearer credential")]
    MissingCredential,
    #[error("invalid token")]
    InvalidToken,
    #[error("token has expired, please sign in again")]
    ExpiredToken,
    #[error("admin role required")]
    InsufficientRole,
}

impl GateError {
    pub fn code(&self) -> &'static str {
        match self {
            GateError::MissingCredential => "MISSING_CREDENTIAL",
            GateError::InvalidToken => "INVALID_TOKEN",
            GateError::ExpiredToken => "EXPIRED_TOKEN",
            GateError::InsufficientRole => "INSUFFICIENT_ROLE",
        }
    }
}

impl From<VerifyError> for GateError {
    fn from(e: VerifyError) -> Self {
        match e {
            VerifyError::Expired => GateError::ExpiredToken,
            VerifyError::Malformed
            | VerifyError::InvalidSignature
            | VerifyError::DisallowedAlgorithm
            | VerifyError::ClaimMismatch(_) => GateError::InvalidToken,
        }
    }
}

/// Identity handed to admin handlers.
///
/// There is no public constructor: a `Principal` only comes out of
/// [`AdminGate::authorize`] after the role check, so its role is always admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    subject_id: String,
    email: String,
    display_name: String,
}

impl Principal {
    fn from_claims(claims: Claims) -> Result<Self, GateError> {
        if !claims.role.is_admin() {
            return Err(GateError::InsufficientRole);
        }

        Ok(Self {
            subject_id: claims.sub,
            email: claims.email,
            display_name: claims.display_name,
        })
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        Role::Admin
    }
}

/// Single choke point for `/admin/*`.
///
/// `Unauthenticated -> CredentialExtracted -> Verified -> RoleChecked -> Authorized`,
/// leaving early with a [`GateError`] at whichever step fails.
#[derive(Debug, Clone)]
pub struct AdminGate {
    verifier: TokenVerifier,
}

impl AdminGate {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self { verifier }
    }

    /// `header` is the raw `Authorization` value, if any.
    pub fn authorize(&self, header: Option<&str>) -> Result<Principal, GateError> {
        let credential = bearer_credential(header).ok_or(GateError::MissingCredential)?;
        let claims = self.verifier.verify(credential)?;

        Principal::from_claims(claims)
    }

    /// Same as [`AdminGate::authorize`] with a fixed clock.
    #[cfg(test)]
    pub fn authorize_at(&self, header: Option<&str>, now: i64) -> Result<Principal, GateError> {
        let credential = bearer_credential(header).ok_or(GateError::MissingCredential)?;
        let claims = self.verifier.verify_at(credential, now)?;

        Principal::from_claims(claims)
    }
}

// `Bearer <token>`; scheme is case-insensitive (RFC 7235).
fn bearer_credential(header: Option<&str>) -> Option<&str> {
    let (scheme, credential) = header?.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let credential = credential.trim();
    (!credential.is_empty()).then_some(credential)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::services::auth::test_support::{
        NOW, admin_claims, mint, test_gate, user_claims,
    };

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[test]
    fn admin_token_is_authorized() {
        let header = bearer(&mint(&admin_claims(NOW + 600)));
        let principal = test_gate().authorize_at(Some(&header), NOW).unwrap();

        assert_eq!(principal.subject_id(), "admin-001");
        assert_eq!(principal.email(), "admin@devflow.com");
        assert_eq!(principal.display_name(), "Administrador DevFlow");
        assert_eq!(principal.role(), Role::Admin);
    }

    #[test]
    fn missing_header_is_missing_credential() {
        assert_eq!(
            test_gate().authorize_at(None, NOW),
            Err(GateError::MissingCredential)
        );
    }

    #[test]
    fn malformed_headers_are_missing_credential() {
        let token = mint(&admin_claims(NOW + 600));
        let gate = test_gate();

        for header in [
            String::new(),
            "Bearer".to_string(),
            "Bearer ".to_string(),
            "Bearer    ".to_string(),
            format!("Basic {}", token),
            format!("Token {}", token),
            token.clone(),
        ] {
            assert_eq!(
                gate.authorize_at(Some(&header), NOW),
                Err(GateError::MissingCredential),
                "header: {header:?}"
            );
        }
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let token = mint(&admin_claims(NOW + 600));
        let gate = test_gate();

        for scheme in ["bearer", "BEARER", "Bearer"] {
            let header = format!("{} {}", scheme, token);
            assert!(gate.authorize_at(Some(&header), NOW).is_ok());
        }
    }

    #[test]
    fn user_role_is_insufficient() {
        let header = bearer(&mint(&user_claims(NOW + 600)));
        assert_eq!(
            test_gate().authorize_at(Some(&header), NOW),
            Err(GateError::InsufficientRole)
        );
    }

    #[test]
    fn missing_or_odd_roles_are_insufficient() {
        let gate = test_gate();

        let mut no_role = admin_claims(NOW + 600);
        no_role.as_object_mut().unwrap().remove("role");

        let mut empty_role = admin_claims(NOW + 600);
        empty_role["role"] = json!("");

        let mut capitalised = admin_claims(NOW + 600);
        capitalised["role"] = json!("Admin");

        let mut superuser = admin_claims(NOW + 600);
        superuser["role"] = json!("superadmin");

        for claims in [no_role, empty_role, capitalised, superuser] {
            let header = bearer(&mint(&claims));
            assert_eq!(
                gate.authorize_at(Some(&header), NOW),
                Err(GateError::InsufficientRole)
            );
        }
    }

    #[test]
    fn null_role_is_insufficient() {
        let mut claims = admin_claims(NOW + 600);
        claims["role"] = json!(null);

        assert_eq!(
            test_gate().authorize_at(Some(&bearer(&mint(&claims))), NOW),
            Err(GateError::InsufficientRole)
        );
    }

    #[test]
    fn null_profile_claims_still_authorize_an_admin() {
        let mut claims = admin_claims(NOW + 600);
        claims["nombre"] = json!(null);
        claims["email"] = json!(null);

        let principal = test_gate()
            .authorize_at(Some(&bearer(&mint(&claims))), NOW)
            .unwrap();
        assert_eq!(principal.subject_id(), "admin-001");
        assert_eq!(principal.email(), "");
        assert_eq!(principal.display_name(), "");
    }

    #[test]
    fn authorize_uses_wall_clock() {
        let now = chrono::Utc::now().timestamp();
        let gate = test_gate();

        let live = bearer(&mint(&admin_claims(now + 3600)));
        let stale = bearer(&mint(&admin_claims(now - 3600)));

        assert!(gate.authorize(Some(&live)).is_ok());
        assert_eq!(gate.authorize(Some(&stale)), Err(GateError::ExpiredToken));
    }

    #[test]
    fn expired_token_is_distinct_from_invalid() {
        let gate = test_gate();
        let expired = bearer(&mint(&admin_claims(NOW)));
        let garbage = bearer("garbage-string");

        let expired_err = gate.authorize_at(Some(&expired), NOW).unwrap_err();
        let garbage_err = gate.authorize_at(Some(&garbage), NOW).unwrap_err();

        assert_eq!(expired_err, GateError::ExpiredToken);
        assert_eq!(garbage_err, GateError::InvalidToken);
        assert_ne!(expired_err.code(), garbage_err.code());
        assert_ne!(expired_err.to_string(), garbage_err.to_string());
    }

    #[test]
    fn expired_user_token_reports_expiry_not_role() {
        let header = bearer(&mint(&user_claims(NOW - 1)));
        assert_eq!(
            test_gate().authorize_at(Some(&header), NOW),
            Err(GateError::ExpiredToken)
        );
    }

    #[test]
    fn verify_errors_map_to_gate_errors() {
        assert_eq!(GateError::from(VerifyError::Expired), GateError::ExpiredToken);
        for e in [
            VerifyError::Malformed,
            VerifyError::InvalidSignature,
            VerifyError::DisallowedAlgorithm,
            VerifyError::ClaimMismatch("iss"),
        ] {
            assert_eq!(GateError::from(e), GateError::InvalidToken);
        }
    }

    #[test]
    fn every_outcome_is_exactly_one_of_authorized_or_rejected() {
        let gate = test_gate();
        let headers = [
            None,
            Some(bearer(&mint(&admin_claims(NOW + 600)))),
            Some(bearer(&mint(&user_claims(NOW + 600)))),
            Some(bearer(&mint(&admin_claims(NOW - 600)))),
            Some(bearer("garbage-string")),
            Some("Basic dXNlcjpwYXNz".to_string()),
        ];

        for header in &headers {
            match gate.authorize_at(header.as_deref(), NOW) {
                Ok(principal) => assert_eq!(principal.role(), Role::Admin),
                Err(
                    GateError::MissingCredential
                    | GateError::InvalidToken
                    | GateError::ExpiredToken
                    | GateError::InsufficientRole,
                ) => {}
            }
        }
    }
}
