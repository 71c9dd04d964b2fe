use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Client::Table)
                .col(ColumnDef::new(Client::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Client::RestaurantId).uuid().not_null())
                .col(ColumnDef::new(Client::Name).string().not_null())
                .col(ColumnDef::new(Client::PhoneNumber).string().not_null())
                .col(ColumnDef::new(Client::Email).string().null())
                .col(
                    ColumnDef::new(Client::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_client_restaurant")
                        .from(Client::Table, Client::RestaurantId)
                        .to(Restaurant::Table, Restaurant::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_client_restaurant_id")
                .table(Client::Table)
                .col(Client::RestaurantId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Client::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Client {
    Table,
    Id,
    RestaurantId,
    Name,
    PhoneNumber,
    Email,
    CreatedAt,
}
