//! Catalog API - REST server for the product catalog

use axum_helpers::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{PgProductRepository, ProductService};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL at {}", config.database.url());

    let db =
        database::postgres::connect_from_config_with_retry(config.database.clone(), None).await?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    let repository = PgProductRepository::new(db.clone());
    let service = ProductService::new(repository);

    let api_routes = api::routes(service);
    let app = create_router::<openapi::ApiDoc>(api_routes)
        .merge(health_router(config.app))
        .merge(api::health::router(db));

    info!(
        "Starting {} {} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_app(app, &config.server).await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
