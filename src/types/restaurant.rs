use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RRestaurantCreate {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RestaurantCreateRes {
    pub restaurant_id: Uuid,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RRestaurantUpdate {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}
