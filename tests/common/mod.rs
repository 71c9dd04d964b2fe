use reserva::db::postgres_service::PostgresService;
use sea_orm::ConnectOptions;
use std::sync::Arc;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // in-memory sqlite, one connection so every request sees the same db
        let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
        opts.max_connections(1);

        let db = Arc::new(
            PostgresService::new(opts)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use reserva::types::restaurant::RRestaurantCreate;
    use serde_json::{json, Value};

    pub fn sample_restaurant(name: &str) -> RRestaurantCreate {
        RRestaurantCreate {
            name: name.to_string(),
            phone_number: "555-0100".to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', "-")),
        }
    }

    pub fn sample_client_body(name: &str) -> Value {
        json!({
            "name": name,
            "phone_number": "555-1",
            "email": null,
            "restaurant_id": null,
        })
    }

    pub fn sample_reservation_body(client_id: &str) -> Value {
        json!({
            "client_id": client_id,
            "reservation_date": "2024-07-01T19:00:00Z",
            "guest_count": 4,
        })
    }
}
