//! `Authorization: Bearer <jwt>` を AdminGate で検証 → Principal を extensions に入れる
//!
//! - 拒否時は handler を実行せずに AppError (401/403) を返す
//! - 生のトークンはログに出さない。拒否理由のコードだけを残す

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// `/admin/*` に認可を掛けるための middleware を適用する。
///
/// `route_layer` なので、存在しないパスは 401 ではなく 404 のまま。
///
/// 例：
/// ```ignore
/// let admin = middleware::auth::admin::apply(admin_routes, state.clone());
/// app = app.nest("/admin", admin);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, admin_middleware))
}

async fn admin_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // 非 ASCII なヘッダ値は「ヘッダなし」と同じ扱い
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let principal = match state.gate.authorize(authorization) {
        Ok(principal) => principal,
        Err(reason) => {
            tracing::warn!(
                reason = reason.code(),
                method = %req.method(),
                path = %req.uri().path(),
                "admin gate rejected request"
            );
            return Err(reason.into());
        }
    };

    tracing::debug!(
        subject = principal.subject_id(),
        path = %req.uri().path(),
        "admin gate authorized request"
    );

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
