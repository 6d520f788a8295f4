/*
 * Responsibility
 * - admin API の request/response DTO
 * - 全レスポンスに timestamp、操作系には実行者 (Principal.email) を含める
 */
pub mod logs;
pub mod system;
pub mod users;
pub mod verify;
