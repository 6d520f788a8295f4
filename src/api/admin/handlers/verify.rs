/*
 * Responsibility
 * - GET /admin/verify
 * - AdminGate を通過した Principal をそのまま返す (ダッシュボードの権限確認用)
 */
use axum::Json;

use crate::api::admin::dto::verify::{AdminUserView, VerifyResponse};
use crate::api::admin::extractors::AdminPrincipal;

pub async fn verify_admin(AdminPrincipal(principal): AdminPrincipal) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        message: "Admin access verified",
        admin_user: AdminUserView::from(&principal),
        timestamp: chrono::Utc::now(),
    })
}
