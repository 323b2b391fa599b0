//! HTTP controller endpoints for the multiverse API.
//!
//! Controllers extract and validate request input, call into services and return typed
//! JSON bodies. Every handler returns `Result<_, Error>` so failures reach the client as
//! the `{message, error: true}` envelope.

pub mod character;
pub mod fallback;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;
