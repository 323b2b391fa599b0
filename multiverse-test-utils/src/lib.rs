//! Shared test harness for the multiverse workspace.
//!
//! Tests declare the tables and fixtures they need with [`TestBuilder`] and receive a
//! [`TestContext`] backed by an in-memory SQLite database.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
