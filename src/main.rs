mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use database::{Database, DbConfig, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let db_config = DbConfig {
        host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
        user: env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
        password: env::var("DB_PASSWORD").unwrap_or_default(),
        database: env::var("DB_NAME").expect("DB_NAME must be set"),
    };

    log::info!("🚀 Starting User Service...");
    log::info!("📊 Database: {}/{}", db_config.host, db_config.database);

    // Initialize MySQL connection pool
    let db = Database::connect(&db_config)
        .await
        .expect("Failed to connect to MySQL");

    log::info!("✅ MySQL connected successfully");

    // The pool is owned here and handed to the handlers through app data;
    // each request acquires and releases a connection on its own.
    let store: Arc<dyn UserStore> = Arc::new(db);
    let store_data = web::Data::from(store);

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:5500") // Browser client (static dev server)
            .allowed_origin("http://127.0.0.1:5500")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // User resource
            .service(api::users::scope())
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
