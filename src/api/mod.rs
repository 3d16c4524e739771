//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Dugout, built on the Axum
//! web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Authentication (`/api/auth`)
//! - `POST /api/auth/register` - Register new user (201, empty body)
//! - `POST /api/auth/login` - Login and receive JWT token
//!
//! ## Teams (`/api/baseball/teams`)
//! - `GET /api/baseball/teams` - List all teams
//! - `POST /api/baseball/teams` - Create a team (201 with assigned id)
//!
//! ## Health (`/health`)
//! - `GET /health` - Health check endpoint
//!
//! # Authentication
//!
//! Team endpoints require a valid JWT token in the `Authorization` header:
//! ```text
//! Authorization: Bearer <token>
//! ```
//!
//! The `/api/auth` routes, `/health`, and the doc paths are exempt.
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI document covering every route the service exposes.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::teams::list_teams,
        handlers::teams::create_team,
        handlers::health::health,
    ),
    components(schemas(
        crate::types::RegisterRequest,
        crate::types::LoginRequest,
        crate::types::TokenResponse,
        crate::types::TeamRequest,
        crate::types::Team,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "teams", description = "Team records"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
