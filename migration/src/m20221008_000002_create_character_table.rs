use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len_uniq(Character::Name, 120))
                    .col(string_len(Character::Status, 120))
                    .col(string_len(Character::Species, 120))
                    .col(string_len(Character::Type, 120))
                    .col(string_len(Character::Gender, 80))
                    .col(string_len(Character::Origin, 80))
                    .col(string_len(Character::Location, 80))
                    .col(string(Character::Image))
                    .col(string_len(Character::Url, 120))
                    .col(string_len(Character::Created, 120))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Status,
    Species,
    Type,
    Gender,
    Origin,
    Location,
    Image,
    Url,
    Created,
}
