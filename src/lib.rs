//! Digital Library API
//!
//! A small Rust REST API server exposing CRUD operations over an
//! in-memory catalog of book records.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<store::BookStore>,
}
