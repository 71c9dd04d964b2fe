use actix_web::{delete, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::gate::{authorize, Operation};
use crate::auth::identity::Identity;
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(serde::Serialize)]
pub struct Response {}

/// Staff only.
#[delete("/{id}")]
pub async fn delete(
    db: web::Data<Arc<PostgresService>>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> ApiResult<Response> {
    authorize(identity.role(), Operation::DeleteUser)?;

    db.delete_user(&path.into_inner()).await?;

    Ok(ApiResponse::NoContent)
}
