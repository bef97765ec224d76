pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::OrderService;
pub use config::Settings;
pub use db::{create_pool, DbPool};
pub use infrastructure::DieselOrderRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::delete_order,
    ),
    components(schemas(
        handlers::orders::CreateOrderRequest,
        handlers::orders::CreateOrderItemRequest,
        handlers::orders::OrderItemDto,
        handlers::orders::OrderResponse,
        handlers::orders::MessageResponse,
    )),
    tags((name = "orders", description = "Order intake"))
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins.iter().fold(
        Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600),
        |cors, origin| match origin.as_str() {
            "*" => cors.allow_any_origin(),
            origin => cors.allowed_origin(origin),
        },
    )
}

/// Build and return an actix-web `Server` bound to the configured address.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(pool: DbPool, settings: &Settings) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(OrderService::new(DieselOrderRepository::new(pool)));
    let allowed_origins = settings.allowed_origins.clone();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(cors(&allowed_origins))
            .wrap(Logger::default())
            .configure(handlers::orders::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((settings.host.clone(), settings.port))?
    .run())
}
