use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use sqlx::postgres::PgPoolOptions;

use user_crud_api::config::Config;
use user_crud_api::repositories::PgUserRepository;
use user_crud_api::routes;
use user_crud_api::services::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(io::Error::other)?;

    // Connect to PostgreSQL
    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout)
        .connect(&config.database_url)
        .await
        .map_err(io::Error::other)?;
    info!("Connected to PostgreSQL successfully!");

    PgUserRepository::new(pool.clone())
        .ensure_schema()
        .await
        .map_err(io::Error::other)?;

    // Initialize services
    let user_service = web::Data::new(UserService::new(pool));

    // Start HTTP server
    let server_addr = config.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
