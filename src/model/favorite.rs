use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl From<entity::favorites::Model> for FavoriteDto {
    fn from(model: entity::favorites::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            user_id: model.user_id,
            character_id: model.character_id,
            planet_id: model.planet_id,
        }
    }
}

/// Request body for adding a favorite to the user in the path
///
/// `user_id` may be omitted; when present it must match the path.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateFavoriteDto {
    pub name: Option<String>,
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteListDto {
    pub msg: String,
    pub results: Vec<FavoriteDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCreatedDto {
    pub msg: String,
    pub result: FavoriteDto,
}
