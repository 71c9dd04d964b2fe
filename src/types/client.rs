use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RClientCreate {
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
    /// Accepted but never trusted. The stored row always carries the caller's
    /// own restaurant id.
    pub restaurant_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RClientUpdate {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    /// Absent leaves the email alone; an explicit null clears it.
    #[serde(default, deserialize_with = "crate::types::double_option")]
    pub email: Option<Option<String>>,
}

#[derive(Debug)]
pub struct DBClientCreate {
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
}
