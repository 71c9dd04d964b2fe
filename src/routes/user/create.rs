use actix_web::{post, web};
use std::sync::Arc;

use crate::auth::gate::{authorize, Operation, Role};
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserRegister, RUserRegister, UserRegisterRes};
use crate::utils::token::encrypt;

/// Self-registration, open to anyone.
#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserRegisterRes> {
    authorize(Role::Anonymous, Operation::RegisterUser)?;

    if body.username.trim().is_empty() {
        return Err(AppError::Validation("username must not be empty".into()));
    }
    if body.password.is_empty() {
        return Err(AppError::Validation("password must not be empty".into()));
    }

    let password_hash = encrypt(&body.password)
        .map_err(|e| AppError::Internal(format!("hashing failed: {e}")))?;

    let user_id = db
        .register_user(DBUserRegister {
            username: body.username.clone(),
            password_hash,
        })
        .await?;

    Ok(ApiResponse::Created(UserRegisterRes { user_id }))
}
