//! API routes module

pub mod health;
pub mod index;

use axum::Router;
use domain_products::{handlers, ProductRepository, ProductService};

/// Create all API routes
pub fn routes<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .nest("/products", handlers::router(service))
        .merge(index::router())
}
