use entity::RestaurantOwned;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Select};
use uuid::Uuid;

pub mod postgres_service;

mod client;
mod reservation;
mod restaurant;
mod user;

/// Single enforcement point for tenant isolation. Every read of a
/// restaurant-owned entity starts from this filtered select, so a row under
/// another restaurant is indistinguishable from a row that does not exist.
pub(crate) fn scoped<E: RestaurantOwned>(restaurant_id: Uuid) -> Select<E> {
    E::find().filter(E::restaurant_column().eq(restaurant_id))
}
