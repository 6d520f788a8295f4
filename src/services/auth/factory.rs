/// Factory: build `AdminGate` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{AdminGate, SigningKey, TokenVerifier};

pub fn build_admin_gate(config: &Config) -> Arc<AdminGate> {
    let key = SigningKey::new(config.jwt_secret.as_bytes());
    let verifier = TokenVerifier::new(
        &key,
        config.jwt_issuer.as_deref(),
        config.jwt_audience.as_deref(),
    );

    Arc::new(AdminGate::new(verifier))
}
