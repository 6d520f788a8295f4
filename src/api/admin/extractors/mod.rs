/*!
 * Principal extractor
 *
 * Public API:
 * - AdminPrincipal
 */

mod admin_principal;

pub use admin_principal::AdminPrincipal;
