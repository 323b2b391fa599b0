//! Test fixture modules for database record creation.
//!
//! Each submodule extends [`TestContext`](crate::TestContext) with an accessor for a
//! fixture helper that inserts records into the test database. The `factory` module
//! provides in-memory models that don't touch the database.

pub mod character;
pub mod factory;
pub mod favorite;
pub mod planet;
pub mod user;
