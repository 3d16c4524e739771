//! JWT Authentication and Middleware
//!
//! This module provides authentication infrastructure for the Dugout API,
//! including JWT token generation/validation and Axum middleware.
//!
//! # Module Structure
//!
//! - [`auth::jwt`](crate::auth::jwt) - JWT token encoding, decoding, and claims
//! - [`auth::middleware`](crate::auth::middleware) - Axum layers and extractors for authentication
//!
//! # Security Features
//!
//! - **Password Hashing**: Uses Argon2id (memory-hard) for secure password storage
//! - **JWT Tokens**: HS256 signed tokens with configurable expiration
//! - **Stateless Sessions**: no server-side session store; every request
//!   carries its own proof of identity
//!
//! # Usage
//!
//! ## Token Generation
//!
//! ```ignore
//! use dugout::auth::jwt::AuthService;
//!
//! let auth = AuthService::new(secret, expiry_secs);
//! let token = auth.generate_token("alice", "user")?;
//! ```
//!
//! ## Middleware
//!
//! Protected routers get the bearer gate as a layer; the middleware verifies
//! the token and injects `Claims` into the request extensions:
//!
//! ```ignore
//! use axum::middleware;
//!
//! let protected = Router::new()
//!     .route("/baseball/teams", get(handler))
//!     .layer(middleware::from_fn(move |req, next| {
//!         dugout::auth::middleware::auth_middleware(auth.clone(), req, next)
//!     }));
//! ```
//!
//! ## Extracting Claims in Handlers
//!
//! ```ignore
//! use dugout::auth::middleware::AuthUser;
//!
//! async fn protected_handler(AuthUser(claims): AuthUser) -> impl IntoResponse {
//!     format!("Hello, {}!", claims.sub)
//! }
//! ```
//!
//! # Configuration
//!
//! Configure via `dugout.toml`:
//! ```toml
//! [auth]
//! jwt_secret_env = "JWT_SECRET"   # Env var holding the signing secret
//! token_expiry = 3600             # Token validity in seconds
//! ```

/// JWT token generation, validation, and password hashing services.
pub mod jwt;
/// Authentication middleware and extractors for protected routes.
pub mod middleware;
