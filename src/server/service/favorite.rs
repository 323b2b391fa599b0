//! Favorites owned by a user.

use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository,
        },
        error::{api::ApiError, Error},
    },
};

/// A validated request to add a favorite to a user.
#[derive(Debug, Clone)]
pub struct NewFavorite {
    /// Label of the favorite.
    pub name: String,
    /// Character to favorite, if any.
    pub character_id: Option<i32>,
    /// Planet to favorite, if any.
    pub planet_id: Option<i32>,
}

/// Service for a user's favorites.
///
/// Every operation is scoped to the user in the request path; a user that does not exist
/// yields a 404 rather than an empty result.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the favorites of a user, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - Exactly the rows whose `user_id` is the given user
    /// - `Err(Error::ApiError)` - 404, the user does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let favorites = favorite_repo.get_by_user_id(user_id).await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    /// Adds a favorite to a user.
    ///
    /// The user and any referenced character or planet must exist. A favorite referencing
    /// neither a character nor a planet is allowed.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite
    /// - `Err(Error::ApiError)` - 404, the user, character or planet does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        favorite: NewFavorite,
    ) -> Result<FavoriteDto, Error> {
        self.ensure_user_exists(user_id).await?;

        if let Some(character_id) = favorite.character_id {
            let character_repo = CharacterRepository::new(self.db);
            if character_repo.get_by_id(character_id).await?.is_none() {
                return Err(
                    ApiError::not_found(format!("Character {} not found", character_id)).into(),
                );
            }
        }

        if let Some(planet_id) = favorite.planet_id {
            let planet_repo = PlanetRepository::new(self.db);
            if planet_repo.get_by_id(planet_id).await?.is_none() {
                return Err(ApiError::not_found(format!("Planet {} not found", planet_id)).into());
            }
        }

        let favorite_repo = FavoriteRepository::new(self.db);
        let favorite = favorite_repo
            .create(
                user_id,
                favorite.name,
                favorite.character_id,
                favorite.planet_id,
            )
            .await?;

        tracing::debug!(user_id = %user_id, favorite_id = %favorite.id, "Added favorite");

        Ok(FavoriteDto::from(favorite))
    }

    /// Deletes a favorite owned by the user.
    ///
    /// A favorite that exists but belongs to another user is treated the same as one that
    /// does not exist, and is left untouched.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was deleted
    /// - `Err(Error::ApiError)` - 404, no such favorite for this user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_favorite(&self, user_id: i32, favorite_id: i32) -> Result<(), Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let result = favorite_repo.delete_for_user(favorite_id, user_id).await?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found(format!(
                "Favorite {} not found for user {}",
                favorite_id, user_id
            ))
            .into());
        }

        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ApiError::not_found(format!("User {} not found", user_id)).into()),
        }
    }
}
