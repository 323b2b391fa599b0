//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating entity models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for unit tests
//! and as the source of the values inserted by the database fixtures.

/// Password hash stored for fixture users; it does not correspond to any real password.
pub static TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$dGVzdGhhc2g";

/// Create a mock user model with a placeholder password hash.
pub fn mock_user_model(id: i32, email: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        email: email.to_string(),
        password: TEST_PASSWORD_HASH.to_string(),
    }
}

/// Create a mock character model.
///
/// Only `name` is unique, every other column carries a shared test value.
pub fn mock_character_model(id: i32, name: &str) -> entity::character::Model {
    entity::character::Model {
        id,
        name: name.to_string(),
        status: "Alive".to_string(),
        species: "Human".to_string(),
        r#type: String::new(),
        gender: "Male".to_string(),
        origin: "Earth (C-137)".to_string(),
        location: "Citadel of Ricks".to_string(),
        image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", slug(name)),
        url: format!("https://rickandmortyapi.com/api/character/{}", slug(name)),
        created: "2017-11-04T18:48:46.250Z".to_string(),
    }
}

/// Create a mock planet model.
///
/// `name` and `url` are unique; the url is derived from the name.
pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        r#type: "Planet".to_string(),
        dimension: "Dimension C-137".to_string(),
        residents: "https://rickandmortyapi.com/api/character/1".to_string(),
        url: format!("https://rickandmortyapi.com/api/location/{}", slug(name)),
        created: "2017-11-10T12:42:04.162Z".to_string(),
    }
}

/// Create a mock favorites model.
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    name: &str,
    character_id: Option<i32>,
    planet_id: Option<i32>,
) -> entity::favorites::Model {
    entity::favorites::Model {
        id,
        name: name.to_string(),
        user_id,
        character_id,
        planet_id,
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
