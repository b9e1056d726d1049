//! Shelf application library
//!
//! Author and book catalog modules plus the bootstrap that wires them into
//! the HTTP server.

pub mod app;
pub mod error;
pub mod modules;

pub use error::CatalogError;
