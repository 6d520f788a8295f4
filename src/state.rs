/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - gate: AdminGate (署名鍵を内包、起動後は読み取り専用)
 *   - environment / started_at: system-status 用
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;
use std::time::Instant;

use crate::services::auth::AdminGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<AdminGate>,
    pub environment: Arc<str>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(gate: Arc<AdminGate>, environment: &str) -> Self {
        Self {
            gate,
            environment: Arc::from(environment),
            started_at: Instant::now(),
        }
    }
}
