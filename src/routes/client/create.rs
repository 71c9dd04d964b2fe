use actix_web::{post, web};
use std::sync::Arc;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::client::{DBClientCreate, RClientCreate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    body: web::Json<RClientCreate>,
) -> ApiResult<entity::client::Model> {
    authorize(identity.role(), Operation::ManageClients)?;
    // stamping: the caller's own restaurant, whatever body.restaurant_id says
    let restaurant_id = identity.restaurant_id()?;

    if body.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    if body.phone_number.trim().is_empty() {
        return Err(AppError::Validation("phone_number must not be empty".into()));
    }

    let body = body.into_inner();
    let client = db
        .create_client(
            restaurant_id,
            DBClientCreate {
                name: body.name,
                phone_number: body.phone_number,
                email: body.email,
            },
        )
        .await?;

    Ok(ApiResponse::Created(client))
}
