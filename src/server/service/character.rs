//! Character lookups.

use sea_orm::DatabaseConnection;

use crate::{
    model::character::CharacterDto,
    server::{
        data::character::CharacterRepository,
        error::{api::ApiError, Error},
    },
};

/// Service for reading characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of CharacterService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every character ordered by id.
    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let characters = character_repo.get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a single character, 404 if it does not exist.
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.get_by_id(character_id).await? {
            Some(character) => Ok(CharacterDto::from(character)),
            None => {
                Err(ApiError::not_found(format!("Character {} not found", character_id)).into())
            }
        }
    }
}
