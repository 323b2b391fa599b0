use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { context: self }
    }
}

pub struct FavoriteFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorites row for the user with the given references
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        name: &str,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<entity::favorites::Model, TestError> {
        let mut favorite =
            factory::mock_favorite_model(0, user_id, name, character_id, planet_id)
                .into_active_model()
                .reset_all();
        favorite.id = ActiveValue::NotSet;

        Ok(entity::prelude::Favorites::insert(favorite)
            .exec_with_returning(&self.context.db)
            .await?)
    }

    /// Insert a user together with one favorite pointing at nothing
    pub async fn insert_user_with_favorite(
        &mut self,
        email: &str,
        name: &str,
    ) -> Result<(entity::user::Model, entity::favorites::Model), TestError> {
        let user_model = self.context.user().insert_user(email).await?;
        let favorite_model = self.insert_favorite(user_model.id, name, None, None).await?;

        Ok((user_model, favorite_model))
    }
}
