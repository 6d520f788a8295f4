use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_LIMIT: usize = 50;

#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<usize>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: &'static str,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: Vec<LogEntry>,
    /// Entries matching the level filter, before `limit` is applied.
    pub total: usize,
    pub requested_by: String,
    pub timestamp: DateTime<Utc>,
}
