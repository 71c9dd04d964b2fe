use actix_web::{post, web};
use std::sync::Arc;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::TokenRes;
use crate::utils::token::construct_token;

#[post("/refresh")]
pub async fn refresh(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
) -> ApiResult<TokenRes> {
    authorize(identity.role(), Operation::RefreshToken)?;

    let secret = db.regenerate_user_token(&identity.user.id).await?;

    Ok(ApiResponse::Ok(TokenRes {
        token: construct_token(&identity.user.id.to_string(), &secret),
    }))
}
