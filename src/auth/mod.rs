//! JWT session tokens and role-gating middleware.

pub mod jwt;
pub mod middleware;

pub use jwt::{issue_token, verify_token, Claims};
pub use middleware::{require_admin, require_editor, CurrentUser};
