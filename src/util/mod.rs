//! Small shared helpers: token persistence and form validation.

pub mod token_storage;
pub mod validate;
