use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20221008_000001_create_user_table::User, m20221008_000002_create_character_table::Character,
    m20221008_000003_create_planet_table::Planet,
};

static IDX_FAVORITES_USER_ID: &str = "idx-favorites-user_id";
static FK_FAVORITES_USER_ID: &str = "fk-favorites-user_id";
static FK_FAVORITES_CHARACTER_ID: &str = "fk-favorites-character_id";
static FK_FAVORITES_PLANET_ID: &str = "fk-favorites-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline, SQLite can't add them with ALTER TABLE
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(string_len(Favorites::Name, 120))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::CharacterId))
                    .col(integer_null(Favorites::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_CHARACTER_ID)
                            .from(Favorites::Table, Favorites::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PLANET_ID)
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table also drops its index and foreign keys
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    Name,
    UserId,
    CharacterId,
    PlanetId,
}
