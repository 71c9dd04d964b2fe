use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_restaurant_table::Restaurant;
use crate::m20240601_000003_create_client_table::Client;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Reservation::Table)
                .col(
                    ColumnDef::new(Reservation::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Reservation::RestaurantId).uuid().not_null())
                .col(ColumnDef::new(Reservation::ClientId).uuid().not_null())
                .col(
                    ColumnDef::new(Reservation::ReservationDate)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(ColumnDef::new(Reservation::GuestCount).integer().not_null())
                .col(
                    ColumnDef::new(Reservation::Status)
                        .string_len(20)
                        .not_null()
                        .default("pending"),
                )
                .col(ColumnDef::new(Reservation::Notes).text().null())
                .col(
                    ColumnDef::new(Reservation::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_reservation_restaurant")
                        .from(Reservation::Table, Reservation::RestaurantId)
                        .to(Restaurant::Table, Restaurant::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_reservation_client")
                        .from(Reservation::Table, Reservation::ClientId)
                        .to(Client::Table, Client::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_reservation_restaurant_id")
                .table(Reservation::Table)
                .col(Reservation::RestaurantId)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_reservation_client_id")
                .table(Reservation::Table)
                .col(Reservation::ClientId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(Reservation::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Reservation {
    Table,
    Id,
    RestaurantId,
    ClientId,
    ReservationDate,
    GuestCount,
    Status,
    Notes,
    CreatedAt,
}
