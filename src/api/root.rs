/*
 * Responsibility
 * - GET / (公開。認可なしで返す唯一のエンドポイント)
 * - サービスの静的メタデータのみ。状態やユーザー情報は含めない
 */
use axum::Json;
use serde_json::{Value, json};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "DevFlow Admin API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Administrative API restricted to users with the admin role",
        "access": "admin-only",
        "endpoints": {
            "verify": "GET /admin/verify",
            "system_status": "GET /admin/system-status",
            "logs": "GET /admin/logs?limit=&level=",
            "users": "GET /admin/users",
            "restart": "POST /admin/system/restart",
        },
    }))
}
