/*
 * Responsibility
 * - GET  /admin/system-status (状態のスナップショット、services はモック)
 * - POST /admin/system/restart (受付のみ。実際の再起動は行わない)
 */
use std::collections::BTreeMap;

use axum::{Json, extract::State};

use crate::api::admin::dto::system::{RestartResponse, SystemStatusResponse};
use crate::api::admin::extractors::AdminPrincipal;
use crate::state::AppState;

fn service_statuses() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("admin_api", "running"),
        ("nestjs_backend", "running"),
        ("nextjs_frontend", "running"),
        ("database", "in-memory"),
        ("authentication", "active"),
    ])
}

pub async fn system_status(
    State(state): State<AppState>,
    AdminPrincipal(principal): AdminPrincipal,
) -> Json<SystemStatusResponse> {
    Json(SystemStatusResponse {
        status: "operational",
        services: service_statuses(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        environment: state.environment.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        requested_by: principal.email().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub async fn restart_system(AdminPrincipal(principal): AdminPrincipal) -> Json<RestartResponse> {
    tracing::info!(executed_by = principal.email(), "system restart requested");

    Json(RestartResponse {
        message: "System restart command accepted",
        status: "scheduled",
        executed_by: principal.email().to_string(),
        timestamp: chrono::Utc::now(),
        note: "No restart is performed; this endpoint only records the request",
    })
}
