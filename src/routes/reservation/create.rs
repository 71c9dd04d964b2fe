use actix_web::{post, web};
use entity::reservation::ReservationStatus;
use std::sync::Arc;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::reservation::{DBReservationCreate, RReservationCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    body: web::Json<RReservationCreate>,
) -> ApiResult<entity::reservation::Model> {
    authorize(identity.role(), Operation::ManageReservations)?;
    // stamping, same rule as clients
    let restaurant_id = identity.restaurant_id()?;

    if body.guest_count < 1 {
        return Err(AppError::Validation("guest_count must be at least 1".into()));
    }

    let body = body.into_inner();
    let reservation = db
        .create_reservation(
            restaurant_id,
            DBReservationCreate {
                client_id: body.client_id,
                reservation_date: body.reservation_date,
                guest_count: body.guest_count,
                status: body.status.unwrap_or(ReservationStatus::Pending),
                notes: body.notes,
            },
        )
        .await?;

    Ok(ApiResponse::Created(reservation))
}
