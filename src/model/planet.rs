use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub r#type: String,
    pub dimension: String,
    pub residents: String,
    pub url: String,
    pub created: String,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(model: entity::planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            r#type: model.r#type,
            dimension: model.dimension,
            residents: model.residents,
            url: model.url,
            created: model.created,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanetListDto {
    pub msg: Vec<PlanetDto>,
}
