use actix_web::web;

pub mod client;
pub mod health;
pub mod reservation;
pub mod restaurant;
pub mod token;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/users")
            .service(user::create::create)
            .service(user::delete::delete),
    );

    cfg.service(
        web::scope("/token")
            .service(token::refresh::refresh)
            .service(token::obtain::obtain),
    );

    cfg.service(
        web::scope("/restaurants")
            .service(restaurant::my::get_my)
            .service(restaurant::my::update_my)
            .service(restaurant::my::delete_my)
            .service(restaurant::create::create)
            .service(restaurant::list::list),
    );

    cfg.service(
        web::scope("/clients")
            .service(client::create::create)
            .service(client::list::list)
            .service(client::detail::get)
            .service(client::detail::update)
            .service(client::detail::delete),
    );

    cfg.service(
        web::scope("/reservations")
            .service(reservation::create::create)
            .service(reservation::list::list)
            .service(reservation::detail::get)
            .service(reservation::detail::update)
            .service(reservation::detail::delete),
    );
}
