use actix_web::{web, App, HttpServer, middleware};
use env_logger::Env;
use log::{info, warn};
use dotenvy::dotenv;
mod config;
mod routes;
mod templates;
use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logger (RUST_LOG overrides default if set)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Read configuration once; it does not change without a restart
    let config = Config::from_env();
    if config.api_key.is_none() {
        warn!(
            "THUNDERFOREST_API_KEY is not set; /map will use the \"{}\" placeholder",
            routes::MISSING_API_KEY
        );
    }

    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    info!("Server running at http://{}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            // Log each incoming request with status, time, and size
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
            // Share the startup configuration with handlers
            .app_data(config.clone())
            .route("/", web::get().to(routes::index))
            .route("/map", web::get().to(routes::map))
            .route("/static/{filename:.*}", web::get().to(routes::serve_static))
            .default_service(web::route().to(routes::not_found))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
