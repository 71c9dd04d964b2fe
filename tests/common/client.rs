use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

use reserva::{
    db::postgres_service::PostgresService,
    types::user::DBUserRegister,
    utils::token::{construct_token, encrypt},
};

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(reserva::routes::configure_routes)
    }

    /// Register through the db layer, then log in properly, returning the
    /// bearer token a real caller would hold.
    pub async fn create_test_user(&self, username: Option<String>) -> (Uuid, String) {
        let username =
            username.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let password = "hunter2".to_string();

        let password_hash = encrypt(&password).expect("Failed to hash password");
        let user_id = self
            .db
            .register_user(DBUserRegister {
                username: username.clone(),
                password_hash,
            })
            .await
            .expect("Failed to create user");

        let (_, secret) = self
            .db
            .authenticate_user(&username, &password)
            .await
            .expect("Failed to authenticate user");

        (user_id, construct_token(&user_id.to_string(), &secret))
    }

    #[allow(dead_code)]
    pub async fn create_test_staff(&self) -> (Uuid, String) {
        let (user_id, _) = self.create_test_user(None).await;
        self.db
            .promote_to_staff(&user_id)
            .await
            .expect("Failed to promote user");
        // rotate after the privilege change
        let secret = self
            .db
            .regenerate_user_token(&user_id)
            .await
            .expect("Failed to regenerate token");
        (user_id, construct_token(&user_id.to_string(), &secret))
    }

    /// Claim a restaurant for the user, returning its id.
    #[allow(dead_code)]
    pub async fn claim_restaurant(&self, owner: Uuid, name: &str) -> Uuid {
        self.db
            .claim_restaurant(owner, super::test_data::sample_restaurant(name))
            .await
            .expect("Failed to claim restaurant")
    }
}
