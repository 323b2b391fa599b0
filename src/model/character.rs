use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub species: String,
    pub r#type: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub image: String,
    pub url: String,
    pub created: String,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(model: entity::character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            status: model.status,
            species: model.species,
            r#type: model.r#type,
            gender: model.gender,
            origin: model.origin,
            location: model.location,
            image: model.image,
            url: model.url,
            created: model.created,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CharacterListDto {
    pub msg: Vec<CharacterDto>,
}
