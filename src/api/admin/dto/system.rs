use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SystemStatusResponse {
    pub status: &'static str,
    pub services: BTreeMap<&'static str, &'static str>,
    /// Seconds since the process started.
    pub uptime: f64,
    pub environment: String,
    pub version: &'static str,
    pub requested_by: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RestartResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub executed_by: String,
    pub timestamp: DateTime<Utc>,
    pub note: &'static str,
}
