//! User table access.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::UserModel;

/// Repository for the `user` table
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// `password_hash` is stored as given, callers hash the plain password first.
    pub async fn create(&self, email: String, password_hash: String) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by id
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Gets all users ordered by id
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
