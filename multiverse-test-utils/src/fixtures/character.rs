use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn character<'a>(&'a mut self) -> CharacterFixtures<'a> {
        CharacterFixtures { context: self }
    }
}

pub struct CharacterFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> CharacterFixtures<'a> {
    /// Insert a character built by [`factory::mock_character_model`]
    pub async fn insert_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        let mut character = factory::mock_character_model(0, name)
            .into_active_model()
            .reset_all();
        character.id = ActiveValue::NotSet;

        Ok(entity::prelude::Character::insert(character)
            .exec_with_returning(&self.context.db)
            .await?)
    }
}
