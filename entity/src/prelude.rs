pub use super::character::Entity as Character;
pub use super::favorites::Entity as Favorites;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
