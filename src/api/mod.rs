/*
 * Responsibility
 * - URL 空間の入口
 *   - root:  GET / (公開、認可なし)
 *   - admin: /admin 配下 (全ルートが AdminGate の背後)
 */
pub mod admin;
pub mod root;
