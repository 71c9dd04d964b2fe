use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(User::Table)
                .col(ColumnDef::new(User::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(User::Username).string().not_null())
                .col(ColumnDef::new(User::PasswordHash).string().not_null())
                .col(ColumnDef::new(User::TokenHash).string().null())
                .col(
                    ColumnDef::new(User::IsStaff)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                // nullable: a user owns zero or one restaurant
                .col(ColumnDef::new(User::RestaurantId).uuid().null())
                .col(
                    ColumnDef::new(User::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(User::LastLogin)
                        .timestamp_with_time_zone()
                        .null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_restaurant")
                        .from(User::Table, User::RestaurantId)
                        .to(Restaurant::Table, Restaurant::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("uk_user_username")
                .table(User::Table)
                .col(User::Username)
                .unique()
                .to_owned(),
        )
        .await?;

        // one-to-one: no two users may point at the same restaurant
        m.create_index(
            Index::create()
                .name("uk_user_restaurant_id")
                .table(User::Table)
                .col(User::RestaurantId)
                .unique()
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(User::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
    PasswordHash,
    TokenHash,
    IsStaff,
    RestaurantId,
    CreatedAt,
    LastLogin,
}
