/*
 * Responsibility
 * - /admin の URL 構造を定義
 * - 全ルートに AdminGate (middleware::auth::admin) を route_layer で適用する
 *   ここを経由しない admin handler は存在しない
 */
use axum::{
    Router,
    handler::Handler,
    http::Method,
    routing::{MethodRouter, get, post},
};

use crate::api::admin::handlers::{
    logs::list_logs,
    system::{restart_system, system_status},
    users::list_users,
    verify::verify_admin,
};
use crate::middleware;
use crate::state::AppState;

/// One mounted admin route, relative to `/admin`.
pub struct AdminRoute {
    pub method: Method,
    pub path: &'static str,
    handler: MethodRouter<AppState>,
}

impl AdminRoute {
    fn get<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            method: Method::GET,
            path,
            handler: get(handler),
        }
    }

    fn post<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            method: Method::POST,
            path,
            handler: post(handler),
        }
    }
}

/// The single table `routes()` mounts from.
pub fn admin_routes() -> [AdminRoute; 5] {
    [
        AdminRoute::get("/verify", verify_admin),
        AdminRoute::get("/system-status", system_status),
        AdminRoute::get("/logs", list_logs),
        AdminRoute::get("/users", list_users),
        AdminRoute::post("/system/restart", restart_system),
    ]
}

pub fn routes(state: AppState) -> Router<AppState> {
    let router = admin_routes()
        .into_iter()
        .fold(Router::new(), |router, route| {
            tracing::debug!(method = %route.method, path = route.path, "mounting admin route");
            router.route(route.path, route.handler)
        });

    middleware::auth::admin::apply(router, state)
}
