/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - auth::admin::apply (認可), cors / http / security_headers (横断的関心事)
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
