use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the given email and the factory password hash
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        let mut user = factory::mock_user_model(0, email)
            .into_active_model()
            .reset_all();
        user.id = ActiveValue::NotSet;

        Ok(entity::prelude::User::insert(user)
            .exec_with_returning(&self.context.db)
            .await?)
    }
}
