//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_multiverse_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,        // emails
    characters: Vec<String>,   // names
    planets: Vec<String>,      // names
    favorites: Vec<(i32, String, Option<i32>, Option<i32>)>, // (user_id, name, character_id, planet_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_multiverse_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
            favorites: Vec::new(),
        }
    }

    /// Add every application table to the test database.
    ///
    /// Creates User, Character, Planet and Favorites, in foreign key order.
    pub fn with_multiverse_tables(mut self) -> Self {
        self.include_multiverse_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use multiverse_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), multiverse_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Favorites)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given email during `build()`.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a character with the given name during `build()`.
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    /// Insert a planet with the given name during `build()`.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a favorites row during `build()`.
    ///
    /// Fixtures are inserted users first, so `user_id` may refer to a user queued
    /// with `with_user` (ids start at 1 in insertion order).
    pub fn with_favorite(
        mut self,
        user_id: i32,
        name: impl Into<String>,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Self {
        self.favorites
            .push((user_id, name.into(), character_id, planet_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (application tables if specified, then custom tables)
    /// 2. Inserts users, characters, planets, then favorites
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_multiverse_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Favorites),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for email in self.users {
            context.user().insert_user(&email).await?;
        }

        for name in self.characters {
            context.character().insert_character(&name).await?;
        }

        for name in self.planets {
            context.planet().insert_planet(&name).await?;
        }

        for (user_id, name, character_id, planet_id) in self.favorites {
            context
                .favorite()
                .insert_favorite(user_id, &name, character_id, planet_id)
                .await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
