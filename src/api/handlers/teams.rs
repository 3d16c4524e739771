//! Team resource handlers.
//!
//! A team record is written in full at creation and never partially
//! updated; reads return the whole collection.

use crate::{
    auth::middleware::AuthUser,
    types::{Json, Result, Team, TeamRequest},
    AppState,
};
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

/// List all teams.
#[utoipa::path(
    get,
    path = "/api/baseball/teams",
    responses(
        (status = 200, description = "List of teams", body = Vec<Team>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "teams",
    security(("bearer" = []))
)]
pub async fn list_teams(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<Team>>> {
    tracing::debug!(user = %claims.sub, "listing teams");

    let teams = state.db.list_teams().await?;

    Ok(Json(teams))
}

/// Create a new team from the request body.
#[utoipa::path(
    post,
    path = "/api/baseball/teams",
    request_body = TeamRequest,
    responses(
        (status = 201, description = "Team created", body = Team),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "teams",
    security(("bearer" = []))
)]
pub async fn create_team(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<TeamRequest>,
) -> Result<(StatusCode, Json<Team>)> {
    let id = Uuid::new_v4().to_string();

    let team = state
        .db
        .create_team(
            &id,
            &payload.name,
            &payload.location,
            &payload.manager,
            &payload.captain,
        )
        .await?;

    tracing::info!(user = %claims.sub, team = %team.name, "team created");

    Ok((StatusCode::CREATED, Json(team)))
}
