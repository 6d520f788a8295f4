use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::auth::Principal;

#[derive(Debug, Serialize)]
pub struct AdminUserView {
    pub id: String,
    pub email: String,
    pub nombre: String,
    pub role: String,
}

impl From<&Principal> for AdminUserView {
    fn from(p: &Principal) -> Self {
        Self {
            id: p.subject_id().to_string(),
            email: p.email().to_string(),
            nombre: p.display_name().to_string(),
            role: p.role().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub message: &'static str,
    pub admin_user: AdminUserView,
    pub timestamp: DateTime<Utc>,
}
