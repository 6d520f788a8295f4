/*
 * Responsibility
 * - GET /admin/users
 * - 永続化は対象外。固定のユーザー一覧を返す
 */
use axum::Json;

use crate::api::admin::dto::users::{UserSummary, UsersResponse};
use crate::api::admin::extractors::AdminPrincipal;

const USERS: [UserSummary; 2] = [
    UserSummary {
        id: "admin-001",
        email: "admin@devflow.com",
        nombre: "Administrador DevFlow",
        role: "admin",
        is_active: true,
        created_at: "2024-01-01T00:00:00Z",
    },
    UserSummary {
        id: "user-001",
        email: "user@devflow.com",
        nombre: "Usuario Demo",
        role: "user",
        is_active: true,
        created_at: "2024-01-01T00:00:00Z",
    },
];

pub async fn list_users(AdminPrincipal(principal): AdminPrincipal) -> Json<UsersResponse> {
    let users = USERS.to_vec();

    Json(UsersResponse {
        total: users.len(),
        users,
        admin_query_by: principal.email().to_string(),
        timestamp: chrono::Utc::now(),
    })
}
