use actix_web::{delete, get, put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::client::RClientUpdate;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
pub async fn get(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> ApiResult<entity::client::Model> {
    authorize(identity.role(), Operation::ManageClients)?;
    let restaurant_id = identity.restaurant_id()?;

    Ok(ApiResponse::Ok(
        db.get_client(restaurant_id, path.into_inner()).await?,
    ))
}

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<RClientUpdate>,
) -> ApiResult<entity::client::Model> {
    authorize(identity.role(), Operation::ManageClients)?;
    let restaurant_id = identity.restaurant_id()?;

    if body.name.is_none() && body.phone_number.is_none() && body.email.is_none() {
        return Err(AppError::Validation("no fields to update".into()));
    }

    Ok(ApiResponse::Ok(
        db.update_client(restaurant_id, path.into_inner(), body.into_inner())
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
    authorize(identity.role(), Operation::ManageClients)?;
    let restaurant_id = identity.restaurant_id()?;

    db.delete_client(restaurant_id, path.into_inner()).await?;

    Ok(ApiResponse::NoContent)
}
