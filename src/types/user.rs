use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserRegister {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserRegisterRes {
    pub user_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RTokenObtain {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenRes {
    pub token: String,
}

/// What the db layer stores for a new account. Hashing happens before this.
#[derive(Debug)]
pub struct DBUserRegister {
    pub username: String,
    pub password_hash: String,
}
