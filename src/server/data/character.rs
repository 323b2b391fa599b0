//! Character table access.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::CharacterModel;

/// Repository for the `character` table
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a character by id
    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets all characters ordered by id
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }
}
