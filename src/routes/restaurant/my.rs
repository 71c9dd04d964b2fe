use actix_web::{delete, get, patch, web};
use std::sync::Arc;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::restaurant::RRestaurantUpdate;

#[get("/my")]
pub async fn get_my(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
) -> ApiResult<entity::restaurant::Model> {
    authorize(identity.role(), Operation::ManageOwnRestaurant)?;

    Ok(ApiResponse::Ok(
        db.get_own_restaurant(identity.user.id).await?,
    ))
}

#[patch("/my")]
pub async fn update_my(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    body: web::Json<RRestaurantUpdate>,
) -> ApiResult<entity::restaurant::Model> {
    authorize(identity.role(), Operation::ManageOwnRestaurant)?;

    if body.name.is_none() && body.phone_number.is_none() && body.email.is_none() {
        return Err(crate::types::error::AppError::Validation(
            "no fields to update".into(),
        ));
    }

    Ok(ApiResponse::Ok(
        db.update_own_restaurant(identity.user.id, body.into_inner())
            .await?,
    ))
}

#[derive(serde::Serialize)]
pub struct Response {}

#[delete("/my")]
pub async fn delete_my(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
) -> ApiResult<Response> {
    authorize(identity.role(), Operation::ManageOwnRestaurant)?;

    db.delete_own_restaurant(identity.user.id).await?;

    Ok(ApiResponse::NoContent)
}
