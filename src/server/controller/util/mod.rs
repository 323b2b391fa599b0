//! Request extraction and validation helpers shared by controllers.

pub mod extract;
pub mod validate;
