//! REST backend for users, characters, planets and their favorites.

pub mod model;
pub mod server;
