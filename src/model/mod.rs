//! Request and response DTOs exposed by the HTTP API.
//!
//! Each entity has a DTO built from its database model via `From`, which is the only place
//! a stored record is turned into something the API returns. Secrets such as the user
//! password never appear in a DTO.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
