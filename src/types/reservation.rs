use chrono::{DateTime, Utc};
use entity::reservation::ReservationStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RReservationCreate {
    pub client_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub guest_count: i32,
    pub status: Option<ReservationStatus>,
    pub notes: Option<String>,
    /// Accepted but never trusted, same rule as client creation.
    pub restaurant_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RReservationUpdate {
    pub client_id: Option<Uuid>,
    pub reservation_date: Option<DateTime<Utc>>,
    pub guest_count: Option<i32>,
    pub status: Option<ReservationStatus>,
    /// Absent leaves the notes alone; an explicit null clears them.
    #[serde(default, deserialize_with = "crate::types::double_option")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug)]
pub struct DBReservationCreate {
    pub client_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub guest_count: i32,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}
