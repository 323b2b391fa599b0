//! Data access layer repositories.
//!
//! Repositories are thin wrappers over SeaORM queries, one per entity. They return
//! `Option`/`DeleteResult` for absent rows and leave deciding what absence means to the
//! service layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
