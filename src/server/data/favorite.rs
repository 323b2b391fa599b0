//! Favorites table access.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::FavoriteModel;

/// Repository for the `favorites` table
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new favorites row for the user
    pub async fn create(
        &self,
        user_id: i32,
        name: String,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorites::ActiveModel {
            name: ActiveValue::Set(name),
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets every favorites row owned by the user, ordered by id
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorites row only if it belongs to the user
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_for_user(
        &self,
        favorite_id: i32,
        user_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_many()
            .filter(entity::favorites::Column::Id.eq(favorite_id))
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
