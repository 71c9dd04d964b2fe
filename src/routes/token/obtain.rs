use actix_web::{post, web};
use std::sync::Arc;

use crate::auth::gate::{authorize, Operation, Role};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RTokenObtain, TokenRes};
use crate::utils::token::construct_token;

/// Login: password in, bearer token out. Rotates the stored secret, so older
/// tokens stop working.
#[post("")]
pub async fn obtain(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RTokenObtain>,
) -> ApiResult<TokenRes> {
    authorize(Role::Anonymous, Operation::ObtainToken)?;

    let (user_id, secret) = db.authenticate_user(&body.username, &body.password).await?;

    Ok(ApiResponse::Ok(TokenRes {
        token: construct_token(&user_id.to_string(), &secret),
    }))
}
