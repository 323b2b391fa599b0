//! User accounts.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand::RngCore;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{api::ApiError, Error},
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user ordered by id.
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::ApiError)` - 404, no user with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_id(user_id).await? {
            Some(user) => Ok(UserDto::from(user)),
            None => Err(ApiError::not_found(format!("User {} not found", user_id)).into()),
        }
    }

    /// Creates a user, storing an Argon2 hash of the password.
    ///
    /// # Arguments
    /// - `email` - Email address, must not already be registered
    /// - `password` - Plain password, only its hash is persisted
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::DbErr)` - Email already registered (unique violation) or database failure
    /// - `Err(Error::PasswordHashError)` - Hashing the password failed
    pub async fn create_user(&self, email: String, password: String) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let password_hash = hash_password(&password)?;
        let user = user_repo.create(email, password_hash).await?;

        tracing::debug!(user_id = %user.id, "Created user");

        Ok(UserDto::from(user))
    }
}

fn hash_password(password: &str) -> Result<String, Error> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHashError(e.to_string()))
}
