//! Planet table access.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::PlanetModel;

/// Repository for the `planet` table
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a planet by id
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets all planets ordered by id
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }
}
