use actix_web::{delete, get, put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::reservation::RReservationUpdate;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
pub async fn get(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> ApiResult<entity::reservation::Model> {
    authorize(identity.role(), Operation::ManageReservations)?;
    let restaurant_id = identity.restaurant_id()?;

    Ok(ApiResponse::Ok(
        db.get_reservation(restaurant_id, path.into_inner()).await?,
    ))
}

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<RReservationUpdate>,
) -> ApiResult<entity::reservation::Model> {
    authorize(identity.role(), Operation::ManageReservations)?;
    let restaurant_id = identity.restaurant_id()?;

    if let Some(guest_count) = body.guest_count {
        if guest_count < 1 {
            return Err(AppError::Validation("guest_count must be at least 1".into()));
        }
    }
    if body.client_id.is_none()
        && body.reservation_date.is_none()
        && body.guest_count.is_none()
        && body.status.is_none()
        && body.notes.is_none()
    {
        return Err(AppError::Validation("no fields to update".into()));
    }

    Ok(ApiResponse::Ok(
        db.update_reservation(restaurant_id, path.into_inner(), body.into_inner())
            .await?,
    ))
}

#[derive(serde::Serialize)]
pub struct Response {}

#[delete("/{id}")]
pub async fn delete(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> ApiResult<Response> {
    authorize(identity.role(), Operation::ManageReservations)?;
    let restaurant_id = identity.restaurant_id()?;

    db.delete_reservation(restaurant_id, path.into_inner())
        .await?;

    Ok(ApiResponse::NoContent)
}
