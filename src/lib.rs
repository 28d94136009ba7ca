//! product-batch - validates batches of product records and writes them to a
//! key-value store in one parameterized batch per request.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod ingest;
pub mod observability;
pub mod product;
pub mod statement;
pub mod store;
