use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::{GateError, Principal};

/// Handler で、AdminGate が作った Principal を受け取るための extractor
///
/// middleware が Principal を request.extensions() に insert 済みである前提。
/// 見つからない場合 (ミドルウェア未設定) は handler 本体を実行せずに 401 を返す。
#[derive(Debug, Clone)]
pub struct AdminPrincipal(pub Principal);

impl<S> FromRequestParts<S> for AdminPrincipal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AdminPrincipal)
            .ok_or_else(|| {
                tracing::error!("admin handler reached without a principal; is the gate applied?");
                AppError::from(GateError::MissingCredential)
            })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    use super::*;

    #[tokio::test]
    async fn rejects_when_gate_did_not_run() {
        let (mut parts, _) = Request::builder().uri("/admin/verify").body(()).unwrap().into_parts();

        let rejection = AdminPrincipal::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
