use actix_web::{get, web};
use std::sync::Arc;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

/// Every tenant in the system. Staff only.
#[get("")]
pub async fn list(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
) -> ApiResult<Vec<entity::restaurant::Model>> {
    authorize(identity.role(), Operation::ListAllRestaurants)?;

    Ok(ApiResponse::Ok(db.list_restaurants().await?))
}
