use actix_web::{web, App, HttpServer};
use log::info;
use std::sync::Arc;

use reserva::config::{EnvConfig, CONFIG};
use reserva::db::postgres_service::PostgresService;
use reserva::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let _ = CONFIG.set(config.clone());
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(config.db_url.as_str())
            .await
            .expect("Failed to initialize PostgresService"),
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
