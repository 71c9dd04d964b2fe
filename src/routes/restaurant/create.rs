use actix_web::{post, web};
use std::sync::Arc;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::restaurant::{RRestaurantCreate, RestaurantCreateRes};

/// Claim a restaurant. One per user, ever.
#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    body: web::Json<RRestaurantCreate>,
) -> ApiResult<RestaurantCreateRes> {
    authorize(identity.role(), Operation::ClaimRestaurant)?;

    if body.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    if body.phone_number.trim().is_empty() {
        return Err(AppError::Validation("phone_number must not be empty".into()));
    }

    let name = body.name.clone();
    let restaurant_id = db
        .claim_restaurant(identity.user.id, body.into_inner())
        .await?;

    Ok(ApiResponse::Created(RestaurantCreateRes {
        restaurant_id,
        message: format!("Restaurant {} has been successfully created.", name),
    }))
}
