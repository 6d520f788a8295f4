/*
 * Responsibility
 * - admin API の公開ポイント (routes() の re-export など)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;

#[cfg(test)]
pub use routes::admin_routes;
