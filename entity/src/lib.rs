use sea_orm::EntityTrait;

pub mod client;
pub mod reservation;
pub mod restaurant;
pub mod user;

/*
 Ownership model:
 A user signs up for free and owns nothing. Claiming a restaurant links it
 one-to-one to the user. Clients and reservations always hang off exactly one
 restaurant, and every read/write of them is filtered by that restaurant id.
 */

/// Entities whose rows belong to exactly one restaurant. The db layer builds
/// every tenant-scoped query through this so no entity gets its own bypass.
pub trait RestaurantOwned: EntityTrait {
    fn restaurant_column() -> Self::Column;
}

impl RestaurantOwned for client::Entity {
    fn restaurant_column() -> client::Column {
        client::Column::RestaurantId
    }
}

impl RestaurantOwned for reservation::Entity {
    fn restaurant_column() -> reservation::Column {
        reservation::Column::RestaurantId
    }
}
