/*
 * Responsibility
 * - GET /admin/logs?limit=&level=
 * - ログ集約は対象外。固定のサンプルを level で絞り込み、limit で切る
 */
use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use chrono::{DateTime, Utc};

use crate::api::admin::dto::logs::{DEFAULT_LOG_LIMIT, LogEntry, LogsQuery, LogsResponse};
use crate::api::admin::extractors::AdminPrincipal;
use crate::error::AppError;
use crate::services::auth::Principal;

fn sample_logs(principal: &Principal, now: DateTime<Utc>) -> Vec<LogEntry> {
    vec![
        LogEntry {
            level: "INFO",
            message: "System started".to_string(),
            timestamp: now,
            service: "DevFlow-System",
        },
        LogEntry {
            level: "INFO",
            message: format!("Admin user {} accessed the admin API", principal.email()),
            timestamp: now,
            service: "Admin-API",
        },
        LogEntry {
            level: "INFO",
            message: "JWT authentication validated".to_string(),
            timestamp: now,
            service: "Auth-Service",
        },
    ]
}

/// Returns the page and the number of entries that matched `level`.
fn select_logs(
    entries: Vec<LogEntry>,
    level: Option<&str>,
    limit: usize,
) -> (Vec<LogEntry>, usize) {
    let matching: Vec<LogEntry> = match level {
        Some(level) => entries
            .into_iter()
            .filter(|e| e.level.eq_ignore_ascii_case(level))
            .collect(),
        None => entries,
    };

    let total = matching.len();
    (matching.into_iter().take(limit).collect(), total)
}

pub async fn list_logs(
    AdminPrincipal(principal): AdminPrincipal,
    query: Result<Query<LogsQuery>, QueryRejection>,
) -> Result<Json<LogsResponse>, AppError> {
    let Query(query) =
        query.map_err(|e| AppError::bad_request("INVALID_QUERY", e.body_text()))?;

    let now = chrono::Utc::now();
    let level = query.level.as_deref().filter(|l| !l.is_empty());
    let limit = query.limit.unwrap_or(DEFAULT_LOG_LIMIT);

    let (logs, total) = select_logs(sample_logs(&principal, now), level, limit);

    Ok(Json(LogsResponse {
        logs,
        total,
        requested_by: principal.email().to_string(),
        timestamp: now,
    }))
}
