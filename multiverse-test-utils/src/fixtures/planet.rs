use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn planet<'a>(&'a mut self) -> PlanetFixtures<'a> {
        PlanetFixtures { context: self }
    }
}

pub struct PlanetFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> PlanetFixtures<'a> {
    /// Insert a planet built by [`factory::mock_planet_model`]
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        let mut planet = factory::mock_planet_model(0, name)
            .into_active_model()
            .reset_all();
        planet.id = ActiveValue::NotSet;

        Ok(entity::prelude::Planet::insert(planet)
            .exec_with_returning(&self.context.db)
            .await?)
    }
}
