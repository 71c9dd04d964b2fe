use serde::{Deserialize, Deserializer};

pub mod client;
pub mod error;
pub mod reservation;
pub mod response;
pub mod restaurant;
pub mod user;

/// For nullable fields in partial updates: an absent field deserializes to
/// None, an explicit null to Some(None).
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
