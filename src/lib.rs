//! # Dugout - JWT-secured REST backend for baseball team records
//!
//! A small REST service providing user registration/login with stateless
//! JWT authentication, fronting CRUD endpoints for a baseball "team"
//! resource.
//!
//! ## Overview
//!
//! Dugout can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `dugout-server` binary
//! 2. **As a library** - Import components into your own Rust project
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dugout::{api, auth::jwt::AuthService, db::SqliteClient, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = SqliteClient::new_local("./data/dugout.db").await?;
//!     let auth = AuthService::new(std::env::var("JWT_SECRET")?, 3600);
//!
//!     let state = AppState {
//!         config: Arc::new(dugout::utils::config::DugoutConfig::default()),
//!         db: Arc::new(db),
//!         auth_service: Arc::new(auth),
//!     };
//!
//!     let app = api::routes::app(state);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`auth`] - JWT authentication and middleware
//! - [`db`] - SQLite storage for users and teams
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration loading
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `swagger-ui` | Interactive API documentation at `/swagger-ui/` |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// JWT authentication and middleware.
pub mod auth;
/// Command-line interface for the server binary.
pub mod cli;
/// Database client (SQLite via libsql).
pub mod db;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use db::SqliteClient;
pub use types::{AppError, Result};
pub use utils::config::DugoutConfig;

use crate::auth::jwt::AuthService;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Infrastructure configuration loaded at startup
    pub config: Arc<DugoutConfig>,
    /// Database client
    pub db: Arc<SqliteClient>,
    /// Authentication service
    pub auth_service: Arc<AuthService>,
}
