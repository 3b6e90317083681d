use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use essentials_trainer::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
    session::SessionMiddleware,
};

fn cors(origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .expose_headers(["x-request-id"])
        .max_age(3600);

    match origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if let Err(err) = config.validate() {
        log::error!("Invalid configuration: {}", err);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()));
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let cors_origin = config.cors_origin.clone();

    let state = AppState::new(config)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    let state = web::Data::new(state);

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SessionMiddleware)
            .wrap(RequestIdMiddleware)
            .wrap(cors(cors_origin.as_deref()))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
