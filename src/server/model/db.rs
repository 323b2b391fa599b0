//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate so the rest of the server
//! doesn't import from it directly.

/// A registered user.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address
/// - `password` - Argon2 hash of the password, never exposed by the API
pub type UserModel = entity::user::Model;

/// A character available to be favorited.
pub type CharacterModel = entity::character::Model;

/// A planet available to be favorited.
pub type PlanetModel = entity::planet::Model;

/// A favorites row linking a user to an optional character and/or planet.
///
/// # Fields (from `entity::favorites::Model`)
/// - `id` - Primary key
/// - `name` - Label given by the user
/// - `user_id` - Owning user, required
/// - `character_id` - Favorited character, if any
/// - `planet_id` - Favorited planet, if any
pub type FavoriteModel = entity::favorites::Model;
