use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user as exposed by the API, without the password
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
        }
    }
}

/// Request body for creating a user
///
/// Fields are optional so that missing ones are reported by validation with a
/// descriptive message instead of a deserialization failure.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub success: bool,
    pub results: Vec<UserDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserCreatedDto {
    pub msg: String,
    pub result: UserDto,
}
