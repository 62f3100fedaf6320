//! Payload validation shared by the create and update paths.

mod validation;
pub use validation::{AccountForm, REQUIRED_FIELDS};
