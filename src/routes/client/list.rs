use actix_web::{get, web};
use std::sync::Arc;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
) -> ApiResult<Vec<entity::client::Model>> {
    authorize(identity.role(), Operation::ManageClients)?;
    let restaurant_id = identity.restaurant_id()?;

    Ok(ApiResponse::Ok(db.list_clients(restaurant_id).await?))
}
