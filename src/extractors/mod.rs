//! Request extractors and guards.

pub mod account_id;
pub mod content_type;
pub use account_id::AccountId;
pub use content_type::{require_content_type, APPLICATION_JSON};
