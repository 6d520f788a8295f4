pub mod admin_gate;
pub mod claims;
pub mod factory;
pub mod token_verifier;

#[cfg(test)]
pub mod test_support;

pub use admin_gate::{AdminGate, GateError, Principal};
pub use factory::build_admin_gate;
pub use token_verifier::{SigningKey, TokenVerifier};
