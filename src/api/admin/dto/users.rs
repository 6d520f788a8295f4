use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: &'static str,
    pub email: &'static str,
    pub nombre: &'static str,
    pub role: &'static str,
    pub is_active: bool,
    pub created_at: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserSummary>,
    pub total: usize,
    pub admin_query_by: String,
    pub timestamp: DateTime<Utc>,
}
