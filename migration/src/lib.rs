pub use sea_orm_migration::prelude::*;

mod m20221008_000001_create_user_table;
mod m20221008_000002_create_character_table;
mod m20221008_000003_create_planet_table;
mod m20221008_000004_create_favorites_table;
mod m20221008_000005_drop_user_is_active;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20221008_000001_create_user_table::Migration),
            Box::new(m20221008_000002_create_character_table::Migration),
            Box::new(m20221008_000003_create_planet_table::Migration),
            Box::new(m20221008_000004_create_favorites_table::Migration),
            Box::new(m20221008_000005_drop_user_is_active::Migration),
        ]
    }
}
