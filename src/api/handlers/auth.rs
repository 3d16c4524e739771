use crate::{
    types::{AppError, Json, LoginRequest, RegisterRequest, Result, TokenResponse},
    AppState,
};
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully"),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username already taken")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<StatusCode> {
    // Validate input
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidInput(
            "Username and password are required".to_string(),
        ));
    }

    // Check if user exists
    if state
        .db
        .get_user_by_username(&payload.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    // Hash password; only the hash is ever persisted
    let password_hash = state.auth_service.hash_password(&payload.password)?;

    let user_id = Uuid::new_v4().to_string();
    state
        .db
        .create_user(&user_id, &payload.username, &password_hash, "user")
        .await?;

    tracing::info!(username = %payload.username, "user registered");

    Ok(StatusCode::CREATED)
}

/// Login with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    // Uniform failure message: don't reveal whether the username exists
    let user = state
        .db
        .get_user_by_username(&payload.username)
        .await?
        .ok_or_else(|| AppError::Auth("Invalid credentials".to_string()))?;

    if !state
        .auth_service
        .verify_password(&payload.password, &user.password_hash)?
    {
        return Err(AppError::Auth("Invalid credentials".to_string()));
    }

    let token = state
        .auth_service
        .generate_token(&user.username, &user.role)?;

    Ok(Json(TokenResponse { token }))
}
