use crate::auth::jwt::AuthService;
use crate::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

const MAX_BODY_BYTES: usize = 64 * 1024;

/// API routes under `/api`.
///
/// Public routes never pass through the bearer gate; everything else gets
/// the auth layer and rejects unauthenticated requests before dispatch.
pub fn create_router(auth_service: Arc<AuthService>) -> Router<AppState> {
    let public_routes = Router::new()
        // Public routes (no auth required)
        .route("/auth/register", post(crate::api::handlers::auth::register))
        .route("/auth/login", post(crate::api::handlers::auth::login));

    let protected_routes = Router::new()
        // Protected routes (auth required)
        .route(
            "/baseball/teams",
            get(crate::api::handlers::teams::list_teams)
                .post(crate::api::handlers::teams::create_team),
        )
        .layer(middleware::from_fn(move |req, next| {
            crate::auth::middleware::auth_middleware(auth_service.clone(), req, next)
        }));

    public_routes.merge(protected_routes)
}

/// The complete application: health probe, `/api` routes, doc paths, and
/// the ambient middleware stack.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(crate::api::handlers::health::health))
        .nest("/api", create_router(state.auth_service.clone()));

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        router.merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", crate::api::ApiDoc::openapi()),
        )
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
