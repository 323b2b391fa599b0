//! SeaORM entities for the multiverse database schema.

pub mod prelude;

pub mod character;
pub mod favorites;
pub mod planet;
pub mod user;
