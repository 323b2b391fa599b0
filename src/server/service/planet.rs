//! Planet lookups.

use sea_orm::DatabaseConnection;

use crate::{
    model::planet::PlanetDto,
    server::{
        data::planet::PlanetRepository,
        error::{api::ApiError, Error},
    },
};

/// Service for reading planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every planet ordered by id.
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a single planet, 404 if it does not exist.
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        match planet_repo.get_by_id(planet_id).await? {
            Some(planet) => Ok(PlanetDto::from(planet)),
            None => Err(ApiError::not_found(format!("Planet {} not found", planet_id)).into()),
        }
    }
}
