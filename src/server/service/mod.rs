//! Business logic services.
//!
//! Services sit between controllers and repositories. They turn absent records into
//! [`ApiError`](crate::server::error::api::ApiError) not-found errors, check that referenced
//! records exist before writing, and map database models onto API DTOs.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
