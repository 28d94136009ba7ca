//! # HTTP Server Module
//!
//! HTTP trigger for the product batch writer.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/products` - `POST` inserts a batch, `PATCH` updates a batch

pub mod config;
pub mod observability_routes;
pub mod products_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
