//! Request extractors: admin guard, per-request database session, validated
//! JSON bodies and pagination.

mod admin;
mod json;
mod pagination;
mod session;

pub use admin::AdminUser;
pub use json::ValidatedJson;
pub use pagination::{Pagination, INVALID_PAGINATION};
pub use session::DbSession;
