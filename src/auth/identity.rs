use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::gate::Role;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::{extract_token_parts, verify};

/// The resolved caller. Handlers take this as an explicit argument; there is
/// no ambient request/session state anywhere else.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: entity::user::Model,
}

impl Identity {
    pub fn role(&self) -> Role {
        if self.user.is_staff {
            Role::Staff
        } else {
            Role::Authenticated
        }
    }

    /// The caller's own restaurant id. This is the only source of tenant ids
    /// for client/reservation operations, so client-supplied ids never win.
    pub fn restaurant_id(&self) -> Result<Uuid, AppError> {
        self.user.restaurant_id.ok_or(AppError::NoRestaurant)
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let auth = BearerAuth::from_request(&req, &mut Payload::None)
                .await
                .map_err(|_| AppError::Unauthorized)?;

            let (user_id, secret) =
                extract_token_parts(auth.token()).ok_or(AppError::Unauthorized)?;

            let db = req
                .app_data::<web::Data<Arc<PostgresService>>>()
                .cloned()
                .ok_or_else(|| AppError::Internal("PostgresService not configured".into()))?;

            let user = db.get_user_by_id(&user_id).await.map_err(|e| match e {
                AppError::NotFound => AppError::Unauthorized,
                other => other,
            })?;

            let hash = user.token_hash.as_deref().ok_or(AppError::Unauthorized)?;
            if !verify(&secret, hash).unwrap_or(false) {
                return Err(AppError::Unauthorized);
            }

            Ok(Identity { user })
        })
    }
}
