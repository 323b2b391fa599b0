use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len_uniq(Planet::Name, 120))
                    .col(string_len(Planet::Type, 120))
                    .col(string_len(Planet::Dimension, 120))
                    .col(string(Planet::Residents))
                    .col(string_len_uniq(Planet::Url, 120))
                    .col(string_len(Planet::Created, 120))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Type,
    Dimension,
    Residents,
    Url,
    Created,
}
