// SPDX-License-Identifier: MIT

//! Directory user listing routes.

use crate::error::{AppError, Result};
use crate::models::DirectoryUser;
use crate::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// Directory routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}

/// List directory users, ordered by id.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<DirectoryUser>>> {
    let users = state.directory.list().await?;
    Ok(Json(users))
}

#[derive(Deserialize, Validate)]
struct CreateUserRequest {
    #[validate(length(min = 1, max = 200))]
    name: String,
    #[validate(email)]
    email: String,
}

/// Create a directory user; responds 201 with the stored record.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<DirectoryUser>)> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = state.directory.create(body.name, body.email).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
